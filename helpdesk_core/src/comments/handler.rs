use super::body::normalize_body;
use super::dto::{CommentBlock, CommentRecord};
use super::legend::parse_legend;

/// Build one record per block, keeping page order (index 0 is the most recent).
pub fn extract_comments(blocks: &[CommentBlock]) -> Vec<CommentRecord> {
    blocks
        .iter()
        .map(|block| {
            let legend = parse_legend(block.legend.as_deref().unwrap_or(""));
            CommentRecord {
                date: legend.date,
                author: legend.author,
                visibility: legend.visibility,
                content: normalize_body(block.body.as_deref().unwrap_or("")),
            }
        })
        .collect()
}
