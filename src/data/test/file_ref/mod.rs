use crate::{
    data::file_ref::FileRefRepository,
    error::AppError,
    model::{
        file::{FileKind, UploadedFile},
        EntityKind,
    },
};
use test_utils::builder::TestBuilder;

mod delete_by_parent;

fn uploaded(key: &str, position: i32) -> UploadedFile {
    UploadedFile {
        key: key.to_string(),
        bucket: "stages".to_string(),
        name: format!("{}.jpg", key),
        size: 3,
        format: "jpg".to_string(),
        kind: FileKind::Photo,
        position,
    }
}
