use crate::error::WorkspaceError;

/// The single error message shown above the workspace. Every `show` hands
/// out a new serial; an expiry only clears the banner when it still carries
/// the message that serial belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Banner {
    serial: u64,
    message: Option<WorkspaceError>,
}

impl Banner {
    pub fn message(&self) -> Option<&WorkspaceError> {
        self.message.as_ref()
    }

    /// Replaces the current message and returns the serial its expiry must use.
    pub fn show(&mut self, err: WorkspaceError) -> u64 {
        self.serial += 1;
        self.message = Some(err);
        self.serial
    }

    /// Clears the banner if `serial` is still the latest. Returns whether it did.
    pub fn expire(&mut self, serial: u64) -> bool {
        if serial != self.serial || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn expiring_current_serial_clears_the_banner() {
        let mut banner = Banner::default();
        let serial = banner.show(ValidationError::EmptyQuestion.into());
        assert!(banner.expire(serial));
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn older_timer_leaves_newer_message_in_place() {
        let mut banner = Banner::default();
        let first = banner.show(ValidationError::EmptyQuestion.into());
        let second = banner.show(WorkspaceError::Server("Upload failed".into()));

        assert!(!banner.expire(first));
        assert_eq!(
            banner.message(),
            Some(&WorkspaceError::Server("Upload failed".into()))
        );

        assert!(banner.expire(second));
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn dismissed_banner_ignores_its_timer() {
        let mut banner = Banner::default();
        let serial = banner.show(ValidationError::NoSession.into());
        banner.dismiss();
        assert!(!banner.expire(serial));
        assert_eq!(banner.message(), None);

        let next = banner.show(ValidationError::NotAPdf.into());
        assert!(next > serial);
        assert_eq!(
            banner.message().map(ToString::to_string).as_deref(),
            Some("Please drop a valid PDF file")
        );
    }
}
