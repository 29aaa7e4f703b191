//! Image actions

use stargazer_client::ImageRecord;

/// Actions for loading the NASA image of the day
#[derive(Debug, Clone, PartialEq)]
pub enum ImageAction {
    LoadBegin,
    LoadSuccess(ImageRecord),
    LoadError { msg: String },
}

impl ImageAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadBegin => "begin-image-load",
            Self::LoadSuccess(_) => "image-load-success",
            Self::LoadError { .. } => "image-load-error",
        }
    }
}
