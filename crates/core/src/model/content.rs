use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("Media URI cannot be empty.")]
    EmptyMediaUri,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FaceValidationError {
    #[error("Face text cannot be empty.")]
    EmptyText,

    #[error(transparent)]
    Media(#[from] MediaValidationError),
}

//
// ─── MEDIA URI ─────────────────────────────────────────────────────────────────
//

/// Location of an image attached to a card face: a local file or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Remote(Url),
}

impl MediaUri {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        Ok(MediaUri::FilePath(p))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        let u = Url::parse(s).map_err(|_| MediaValidationError::EmptyMediaUri)?;
        Ok(MediaUri::Remote(u))
    }

    /// Parse a raw string: anything that parses as an absolute URL becomes
    /// `Remote`, everything else is treated as a file path.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        match Url::parse(s) {
            Ok(u) => Ok(MediaUri::Remote(u)),
            Err(_) => Ok(MediaUri::FilePath(PathBuf::from(s))),
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Remote(u) => Some(u),
            _ => None,
        }
    }

    /// Raw string form, suitable for handing to a storage adapter.
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        match self {
            MediaUri::FilePath(p) => p.to_string_lossy().into_owned(),
            MediaUri::Remote(u) => u.as_str().to_owned(),
        }
    }
}

//
// ─── CARD FACE ─────────────────────────────────────────────────────────────────
//

/// Unvalidated face content as entered by the user or read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceDraft {
    pub text: String,
    pub image: Option<String>,
}

/// One side of a card: question or answer text plus an optional image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    text: String,
    image: Option<MediaUri>,
}

impl FaceDraft {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: Some(image.into()),
        }
    }

    pub fn validate(self) -> Result<CardFace, FaceValidationError> {
        if self.text.trim().is_empty() {
            return Err(FaceValidationError::EmptyText);
        }

        let image = match self.image {
            None => None,
            Some(raw) => Some(MediaUri::parse(raw)?),
        };

        Ok(CardFace {
            text: self.text,
            image,
        })
    }
}

impl CardFace {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&MediaUri> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
