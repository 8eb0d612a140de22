//! What a window's content frame shows, and the single-use upload surface
//! offered by blank windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::constants::DEFAULT_WINDOW_URL;
use crate::window::WindowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameContent {
    Url(String),
    Html(String),
    Empty,
}

/// Which part of the upload surface is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadView {
    /// The window has no upload surface.
    Hidden,
    /// File / paste / manual-entry buttons.
    Choose,
    ManualEntry,
    /// Content was injected; only the reset button remains.
    Loaded,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no such window: {0}")]
    WindowNotFound(WindowId),
    #[error("this window does not accept uploaded content")]
    NoUploadSurface,
    #[error("this window already has content; reset it to load something else")]
    AlreadyUploaded,
    #[error("the clipboard is empty")]
    EmptyClipboard,
    #[error("clipboard access failed: {0}")]
    Clipboard(#[from] ClipboardError),
    #[error("could not read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("enter some HTML first")]
    EmptyText,
}

#[derive(Debug, Clone)]
pub struct ContentFrame {
    content: FrameContent,
    upload: Option<UploadSurface>,
}

#[derive(Debug, Clone, Copy)]
struct UploadSurface {
    has_uploaded: bool,
    view: UploadView,
}

impl ContentFrame {
    pub fn new(url: &str, html: Option<&str>) -> Self {
        if let Some(html) = html {
            return Self {
                content: FrameContent::Html(html.to_string()),
                upload: None,
            };
        }
        if url == DEFAULT_WINDOW_URL {
            return Self {
                content: FrameContent::Empty,
                upload: Some(UploadSurface {
                    has_uploaded: false,
                    view: UploadView::Choose,
                }),
            };
        }
        Self {
            content: FrameContent::Url(url.to_string()),
            upload: None,
        }
    }

    pub fn content(&self) -> &FrameContent {
        &self.content
    }

    pub fn has_upload_surface(&self) -> bool {
        self.upload.is_some()
    }

    pub fn has_uploaded(&self) -> bool {
        self.upload.is_some_and(|u| u.has_uploaded)
    }

    pub fn upload_view(&self) -> UploadView {
        self.upload.map_or(UploadView::Hidden, |u| u.view)
    }

    /// Fails unless the window offers an upload surface that has not been
    /// used yet.
    pub fn ensure_can_upload(&self) -> Result<(), ContentError> {
        match self.upload {
            None => Err(ContentError::NoUploadSurface),
            Some(u) if u.has_uploaded => Err(ContentError::AlreadyUploaded),
            Some(_) => Ok(()),
        }
    }

    pub fn inject(&mut self, html: String) -> Result<(), ContentError> {
        self.ensure_can_upload()?;
        self.content = FrameContent::Html(html);
        if let Some(upload) = self.upload.as_mut() {
            upload.has_uploaded = true;
            upload.view = UploadView::Loaded;
        }
        Ok(())
    }

    /// Clear injected content and re-arm the upload surface.
    pub fn reset(&mut self) -> Result<(), ContentError> {
        let upload = self.upload.as_mut().ok_or(ContentError::NoUploadSurface)?;
        upload.has_uploaded = false;
        upload.view = UploadView::Choose;
        self.content = FrameContent::Empty;
        Ok(())
    }

    pub fn open_manual_entry(&mut self) -> Result<(), ContentError> {
        self.ensure_can_upload()?;
        if let Some(upload) = self.upload.as_mut() {
            upload.view = UploadView::ManualEntry;
        }
        Ok(())
    }

    pub fn close_manual_entry(&mut self) {
        if let Some(upload) = self.upload.as_mut()
            && upload.view == UploadView::ManualEntry
        {
            upload.view = UploadView::Choose;
        }
    }
}

pub fn read_html_file(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|source| ContentError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_kind_follows_options() {
        let html = ContentFrame::new("https://example.com", Some("<b>x</b>"));
        assert_eq!(html.content(), &FrameContent::Html("<b>x</b>".into()));
        assert_eq!(html.upload_view(), UploadView::Hidden);

        let url = ContentFrame::new("https://example.com", None);
        assert_eq!(url.content(), &FrameContent::Url("https://example.com".into()));
        assert!(!url.has_upload_surface());

        let blank = ContentFrame::new("about:blank", None);
        assert_eq!(blank.content(), &FrameContent::Empty);
        assert_eq!(blank.upload_view(), UploadView::Choose);
    }

    #[test]
    fn upload_is_single_use_until_reset() {
        let mut frame = ContentFrame::new("about:blank", None);
        frame.inject("<p>one</p>".into()).unwrap();
        assert!(frame.has_uploaded());
        assert_eq!(frame.upload_view(), UploadView::Loaded);
        assert!(matches!(
            frame.inject("<p>two</p>".into()),
            Err(ContentError::AlreadyUploaded)
        ));
        assert_eq!(frame.content(), &FrameContent::Html("<p>one</p>".into()));

        frame.reset().unwrap();
        assert!(!frame.has_uploaded());
        assert_eq!(frame.content(), &FrameContent::Empty);
        frame.inject("<p>two</p>".into()).unwrap();
    }

    #[test]
    fn url_windows_reject_uploads() {
        let mut frame = ContentFrame::new("https://example.com", None);
        assert!(matches!(
            frame.inject("<p>x</p>".into()),
            Err(ContentError::NoUploadSurface)
        ));
        assert!(matches!(frame.reset(), Err(ContentError::NoUploadSurface)));
    }

    #[test]
    fn manual_entry_toggles_view() {
        let mut frame = ContentFrame::new("about:blank", None);
        frame.open_manual_entry().unwrap();
        assert_eq!(frame.upload_view(), UploadView::ManualEntry);
        frame.close_manual_entry();
        assert_eq!(frame.upload_view(), UploadView::Choose);
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.html");
        let err = read_html_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing.html"));
    }
}
