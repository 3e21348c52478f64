//! Fatal conversion errors.

use thiserror::Error;

/// Conditions that abort a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The subscription contained no profiles.
    #[error("no profiles: the subscription contains no configuration nodes")]
    NoProfiles,

    /// Every listener spec failed validation.
    #[error("no valid listeners: every listener spec was dropped")]
    NoValidListeners,

    /// No resolved profile had a primary upstream.
    #[error("no upstreams extracted: no listener resolved to a profile with a \"proxy\" outbound")]
    NoUpstreamsExtracted,

    /// A listener used the control-plane tag.
    #[error("listener tag {0:?} is reserved for the API inbound")]
    ReservedTag(String),

    /// Two listeners share a tag.
    #[error("listener tag {0:?} is used more than once")]
    DuplicateListenerTag(String),
}
