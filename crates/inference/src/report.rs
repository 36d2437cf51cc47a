//! Plain-text report of stage timings and keypoints.

use crate::{ImageResult, Keypoint, StageTiming};
use std::io::{self, Write};

pub fn version_line(version: &str) -> String {
    format!("DeepView VisionPack Pose Sample with VAAL {}", version)
}

pub fn write_timing<W: Write>(out: &mut W, timing: &StageTiming) -> io::Result<()> {
    writeln!(
        out,
        "Load: {:.4} Infer: {:.4} Decode: {:.4}",
        timing.load_ms(),
        timing.infer_ms(),
        timing.decode_ms()
    )
}

/// One line per keypoint: index, truncated percentage, x and y.
pub fn write_keypoints<W: Write>(out: &mut W, keypoints: &[Keypoint]) -> io::Result<()> {
    for (index, point) in keypoints.iter().enumerate() {
        writeln!(
            out,
            "  [{:3}] - ({:3}%): {:3.2} {:3.2}",
            index,
            point.percent(),
            point.x,
            point.y
        )?;
    }
    Ok(())
}

pub fn write_image<W: Write>(out: &mut W, result: &ImageResult<'_>) -> io::Result<()> {
    write_timing(out, &result.timing)?;
    write_keypoints(out, result.keypoints)
}
