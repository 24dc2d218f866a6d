/// User-facing alert channel. Every hardware or permission failure terminates
/// here instead of propagating to the caller.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr, the kiosk equivalent of a blocking modal.
#[derive(Debug)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("⚠ {}", message);
    }
}

#[cfg(test)]
pub struct RecordingNotifier {
    alerts: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier {
            alerts: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
