pub mod render;
pub mod texture_loader;

use carousel::SlideSet;
use carousel::playback::{MediaError, MediaSink};

use crate::viewer::texture_loader::is_image;

/// Media backend for the window: stills "play" when they are images that
/// loaded; anything else is refused.
pub struct StillSink {
    slides: SlideSet,
}

impl StillSink {
    pub fn new(slides: SlideSet) -> Self {
        Self { slides }
    }

    pub fn set_slides(&mut self, slides: SlideSet) {
        self.slides = slides;
    }
}

impl MediaSink for StillSink {
    fn play(&mut self, index: usize) -> Result<(), MediaError> {
        let media = self
            .slides
            .get(index)
            .and_then(|slide| slide.media.as_deref())
            .ok_or(MediaError::Missing(index))?;
        if is_image(media) {
            log::debug!("Showing {}", media.display());
            Ok(())
        } else {
            Err(MediaError::Backend(format!("cannot play {} in the viewer", media.display())))
        }
    }

    fn pause(&mut self, index: usize) {
        log::trace!("Leaving slide {index}");
    }

    fn set_muted(&mut self, index: usize, muted: bool) {
        log::trace!("Slide {index} muted: {muted}");
    }
}
