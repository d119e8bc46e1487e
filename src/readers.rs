//! File readers for the three input documents.

use std::{fs, path::Path};

use log::{debug, trace};

use crate::document::{self, Block, Document};
use crate::error::ConvertError;

pub fn read_document(path: &Path) -> Result<Document, ConvertError> {
    let bytes = fs::read(path).map_err(|err| ConvertError::file_access(path, &err))?;
    // Invalid UTF-8 sequences become U+FFFD.
    let text = String::from_utf8_lossy(&bytes);
    let document = document::parse(&text);
    debug!(target: "reader", "{}: {} block(s)", path.display(), document.len());
    for (i, block) in document.blocks().iter().enumerate() {
        let keys = block.header.keys().map(String::as_str).collect::<Vec<_>>();
        trace!(
            target: "reader",
            "#{i}: header [{}], {} byte(s)",
            keys.join(", "),
            block.content.len()
        );
    }
    Ok(document)
}

fn read_first_block(path: &Path) -> Result<Option<Block>, ConvertError> {
    Ok(read_document(path)?.into_first())
}

/// First block of the system prompt file, `None` if it has no blocks.
pub fn read_system(path: &Path) -> Result<Option<Block>, ConvertError> {
    read_first_block(path)
}

/// First block of the appendix file, `None` if it has no blocks.
pub fn read_appendix(path: &Path) -> Result<Option<Block>, ConvertError> {
    read_first_block(path)
}

/// All completion blocks, with `appendix` applied to the user side.
/// See [`Document::with_appendix`].
pub fn read_completions(path: &Path, appendix: &str) -> Result<Document, ConvertError> {
    Ok(read_document(path)?.with_appendix(appendix))
}
