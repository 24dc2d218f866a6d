/// Actions the kiosk reacts to. The UI layer that emits them is not part of
/// this crate; anything holding the sender half of the action channel can
/// trigger them.
#[derive(Debug)]
pub enum Action {
    StartCamera,
    FetchLocation,
    ValidateForm,
}
