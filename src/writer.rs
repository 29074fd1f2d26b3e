//! Generic Buffered Writer, for efficient position stream production,
//! with integrated optionnal .gz compression
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "flate2")]
use flate2::{write::GzEncoder, Compression};

#[cfg(feature = "log")]
use log::debug;

use crate::{generator::trace_file_name, Error};

/// [BufferedWriter] is an Output abstraction to propose seamless
/// Gzip and Readable position streaming.
#[derive(Debug)]
pub enum BufferedWriter<W: Write> {
    /// Readable stream
    Plain(BufWriter<W>),
    /// Gzip compressed stream (non readable)
    #[cfg(feature = "flate2")]
    Gz(BufWriter<GzEncoder<W>>),
}

impl<W: Write> BufferedWriter<W> {
    /// Creates new Readable [BufferedWriter]
    pub fn plain(w: W) -> Self {
        Self::Plain(BufWriter::new(w))
    }
    #[cfg(feature = "flate2")]
    /// Creates new [BufferedWriter] to stream gzip encoded content with
    /// desired compression level. The higher the order, the lower the performance.
    pub fn gzip(w: W, compression_level: u32) -> Self {
        Self::Gz(BufWriter::new(GzEncoder::new(
            w,
            Compression::new(compression_level),
        )))
    }
    /// Flushes all pending content and terminates the gzip stream, if any.
    /// Dropping a gzip [BufferedWriter] without calling this may
    /// leave a truncated stream behind.
    pub fn finish(self) -> Result<(), IoError> {
        match self {
            Self::Plain(writer) => {
                let mut inner = writer.into_inner().map_err(|e| e.into_error())?;
                inner.flush()
            },
            #[cfg(feature = "flate2")]
            Self::Gz(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                let mut inner = encoder.finish()?;
                inner.flush()
            },
        }
    }
}

impl<W: Write> Write for BufferedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, IoError> {
        match self {
            Self::Plain(ref mut writer) => writer.write(buf),
            #[cfg(feature = "flate2")]
            Self::Gz(ref mut writer) => writer.write(buf),
        }
    }
    fn flush(&mut self) -> Result<(), IoError> {
        match self {
            Self::Plain(ref mut writer) => writer.flush(),
            #[cfg(feature = "flate2")]
            Self::Gz(ref mut writer) => writer.flush(),
        }
    }
}

/// Creates (or truncates) the position stream file of satellite `name`
/// in `directory`, which is created if need be.
/// With `gzip`, the file gets a `.gz` suffix and content is compressed.
pub fn create_trace_file(
    directory: &Path,
    name: &str,
    gzip: bool,
) -> Result<(PathBuf, BufferedWriter<File>), Error> {
    create_dir_all(directory)?;

    let mut file_name = trace_file_name(name);
    if gzip {
        file_name.push_str(".gz");
    }

    let path = directory.join(file_name);
    let fd = File::create(&path)?;

    #[cfg(feature = "log")]
    debug!("created \"{}\"", path.display());

    let writer = if gzip {
        #[cfg(feature = "flate2")]
        {
            BufferedWriter::gzip(fd, 6)
        }
        #[cfg(not(feature = "flate2"))]
        {
            return Err(Error::Io(IoError::new(
                std::io::ErrorKind::Unsupported,
                "gzip compression requires the flate2 feature",
            )));
        }
    } else {
        BufferedWriter::plain(fd)
    };

    Ok((path, writer))
}
