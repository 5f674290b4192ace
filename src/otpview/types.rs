//! Message and callback types for the OTP view.

use bubbletea_rs::Msg;

/// Sent when the last cell is filled while it holds focus.
///
/// `id` identifies the view that produced the message, see
/// [`Model::id`](super::Model::id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedMsg {
    /// Id of the originating view.
    pub id: usize,
    /// The composite code at the moment of completion.
    pub code: String,
}

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Completion callback invoked with the composite code.
/// Send is required so the view can live inside a bubbletea-rs Model.
pub type FinishedFunc = Box<dyn FnMut(&str) + Send>;

impl From<FinishedMsg> for Msg {
    fn from(msg: FinishedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
