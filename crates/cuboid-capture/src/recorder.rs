use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::CaptureTarget;

/// Errors surfaced by the frame-sequence recorder.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// A frame was recorded outside a started session.
    #[error("recorder session is not running")]
    NotRunning,

    /// The tag does not match any planned capture target.
    #[error("no capture target for face tag {0:?}")]
    UnknownFace(String),

    /// The supplied pixel buffer does not match the planned target size.
    #[error("frame for {tag:?} has {actual} bytes, expected {expected} ({width}x{height} RGBA)")]
    FrameSizeMismatch {
        tag: String,
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },

    /// Filesystem failure while creating folders or frame files.
    #[error("capture I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failure.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

struct FaceSink {
    target: CaptureTarget,
    next_frame: u32,
}

/// Records per-face PNG frame sequences under a shared output root.
///
/// One sink per planned capture target; frames land at
/// `<root>/<tag>/<tag>_<NNNN>.png` with zero-padded frame numbers. The
/// session starts and stops as a unit — all sinks or none — matching the
/// rig's enable/disable semantics. The frame rate is metadata shared by
/// every face; the recorder itself is driven one frame at a time.
pub struct RecorderSession {
    root: PathBuf,
    frame_rate: f32,
    sinks: Vec<FaceSink>,
    running: bool,
}

impl RecorderSession {
    /// Create a stopped session for the given plan.
    pub fn new(root: impl Into<PathBuf>, frame_rate: f32, targets: Vec<CaptureTarget>) -> Self {
        Self {
            root: root.into(),
            frame_rate,
            sinks: targets
                .into_iter()
                .map(|target| FaceSink {
                    target,
                    next_frame: 0,
                })
                .collect(),
            running: false,
        }
    }

    /// The shared capture frame rate.
    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    /// Whether the session is currently recording.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The planned targets this session records.
    pub fn targets(&self) -> impl Iterator<Item = &CaptureTarget> {
        self.sinks.iter().map(|s| &s.target)
    }

    /// Start recording: creates one output folder per face and accepts
    /// frames from then on.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        for sink in &self.sinks {
            std::fs::create_dir_all(self.root.join(sink.target.tag))?;
            debug!(
                tag = sink.target.tag,
                width = sink.target.pixel_width,
                height = sink.target.pixel_height,
                "created capture sink"
            );
        }
        self.running = true;
        info!(
            root = %self.root.display(),
            faces = self.sinks.len(),
            fps = self.frame_rate,
            "recorder session started"
        );
        Ok(())
    }

    /// Stop recording. Further frames are rejected until restarted; frame
    /// counters keep advancing across restarts so sequences never collide.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            let frames: u32 = self.sinks.iter().map(|s| s.next_frame).sum();
            info!(total_frames = frames, "recorder session stopped");
        }
    }

    /// Encode one RGBA frame for the given face tag and append it to that
    /// face's sequence. Returns the path of the written file.
    pub fn record_frame(&mut self, tag: &str, rgba: &[u8]) -> Result<PathBuf, CaptureError> {
        if !self.running {
            return Err(CaptureError::NotRunning);
        }
        let sink = self
            .sinks
            .iter_mut()
            .find(|s| s.target.tag == tag)
            .ok_or_else(|| CaptureError::UnknownFace(tag.to_string()))?;

        let (width, height) = (sink.target.pixel_width, sink.target.pixel_height);
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(CaptureError::FrameSizeMismatch {
                tag: tag.to_string(),
                expected,
                actual: rgba.len(),
                width,
                height,
            });
        }

        let path = frame_path(&self.root, tag, sink.next_frame);
        write_png(&path, width, height, rgba)?;
        sink.next_frame += 1;
        Ok(path)
    }
}

/// Path of frame `frame` for face `tag`: `<root>/<tag>/<tag>_<NNNN>.png`.
fn frame_path(root: &Path, tag: &str, frame: u32) -> PathBuf {
    root.join(tag).join(format!("{tag}_{frame:04}.png"))
}

fn write_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<(), CaptureError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuboid_geom::Face;

    fn target(tag: &'static str, face: Face, w: u32, h: u32) -> CaptureTarget {
        CaptureTarget {
            face,
            tag,
            pixel_width: w,
            pixel_height: h,
            face_index: face.capture_index(),
        }
    }

    fn small_session(root: &Path) -> RecorderSession {
        RecorderSession::new(
            root,
            30.0,
            vec![
                target("front", Face::Front, 4, 2),
                target("up", Face::Up, 4, 4),
            ],
        )
    }

    #[test]
    fn test_frames_land_in_per_face_sequences() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = small_session(dir.path());
        session.start().unwrap();

        let frame = vec![255u8; 4 * 2 * 4];
        let first = session.record_frame("front", &frame).unwrap();
        let second = session.record_frame("front", &frame).unwrap();

        assert_eq!(first, dir.path().join("front").join("front_0000.png"));
        assert_eq!(second, dir.path().join("front").join("front_0001.png"));
        assert!(first.exists());
        assert!(second.exists());
    }

    #[test]
    fn test_frame_counters_are_per_face() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = small_session(dir.path());
        session.start().unwrap();

        let front = vec![0u8; 4 * 2 * 4];
        let up = vec![0u8; 4 * 4 * 4];
        let _ = session.record_frame("front", &front).unwrap();
        let path = session.record_frame("up", &up).unwrap();
        assert_eq!(path, dir.path().join("up").join("up_0000.png"));
    }

    #[test]
    fn test_written_frame_is_valid_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = small_session(dir.path());
        session.start().unwrap();

        let frame = vec![128u8; 4 * 2 * 4];
        let path = session.record_frame("front", &frame).unwrap();

        let decoder = png::Decoder::new(File::open(path).unwrap());
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 4);
        assert_eq!(reader.info().height, 2);
    }

    #[test]
    fn test_size_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = small_session(dir.path());
        session.start().unwrap();

        let result = session.record_frame("front", &[0u8; 3]);
        assert!(matches!(
            result,
            Err(CaptureError::FrameSizeMismatch { expected: 32, .. })
        ));
    }

    #[test]
    fn test_unknown_face_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = small_session(dir.path());
        session.start().unwrap();

        assert!(matches!(
            session.record_frame("sideways", &[]),
            Err(CaptureError::UnknownFace(_))
        ));
    }

    #[test]
    fn test_session_starts_and_stops_as_a_unit() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = small_session(dir.path());
        assert_eq!(session.targets().count(), 2);
        assert_eq!(session.frame_rate(), 30.0);

        // Not running yet: frames rejected, no folders created
        assert!(matches!(
            session.record_frame("front", &[]),
            Err(CaptureError::NotRunning)
        ));

        session.start().unwrap();
        assert!(session.is_running());
        assert!(dir.path().join("front").is_dir());
        assert!(dir.path().join("up").is_dir());

        session.stop();
        assert!(!session.is_running());
        assert!(matches!(
            session.record_frame("front", &[]),
            Err(CaptureError::NotRunning)
        ));
    }

    #[test]
    fn test_restart_does_not_collide_sequences() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = small_session(dir.path());
        session.start().unwrap();
        let frame = vec![0u8; 4 * 2 * 4];
        let _ = session.record_frame("front", &frame).unwrap();
        session.stop();

        session.start().unwrap();
        let path = session.record_frame("front", &frame).unwrap();
        assert_eq!(path, dir.path().join("front").join("front_0001.png"));
    }
}
