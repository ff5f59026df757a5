use std::fmt::{
    Display,
    Formatter,
    Result,
};

use crate::search::{
    Notification,
    NotificationKind,
    RequestToken,
};

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Info, message: message.into() }
    }
}

impl NotificationKind {
    /// The style class token for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.as_str().fmt(f)
    }
}

impl RequestToken {
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for RequestToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "#{}", self.0)
    }
}
