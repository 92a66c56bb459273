//! Editor configuration.
//!
//! Every field has a default, so hosts can pass a partial object (or none at
//! all) and only override what they need.

use serde::{Deserialize, Serialize};

/// Maximum number of history entries kept for undo/redo.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Images can't be resized to this size or smaller, in CSS pixels.
pub const DEFAULT_MIN_IMAGE_SIZE: i32 = 50;

/// Largest number of rows or columns an inserted table may have.
pub const DEFAULT_MAX_TABLE_SIZE: usize = 50;

/// How long the "copied" label stays on a code block button.
pub const DEFAULT_COPY_FEEDBACK_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Text shown in an empty editor until the first edit.
    pub placeholder: String,
    pub history_limit: usize,
    pub min_image_size: i32,
    pub copy_feedback_ms: u32,
    pub max_table_size: usize,
    /// Endpoint accepting `multipart/form-data` image uploads.
    pub upload_endpoint: String,
    /// Replacement `src` for images whose source isn't trusted.
    pub placeholder_image_src: String,
    pub placeholder_image_alt: String,
    /// Initial text of a freshly inserted code block.
    pub code_placeholder: String,
    pub messages: Messages,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: "Commencez à écrire ici...".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            min_image_size: DEFAULT_MIN_IMAGE_SIZE,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            max_table_size: DEFAULT_MAX_TABLE_SIZE,
            upload_endpoint: "http://localhost:8000/api/v1/upload/image".to_string(),
            placeholder_image_src: "https://via.placeholder.com/300x200?text=Image+non+disponible"
                .to_string(),
            placeholder_image_alt: "Image non disponible".to_string(),
            code_placeholder: "Insérez votre code ici...".to_string(),
            messages: Messages::default(),
        }
    }
}

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub copy_label: String,
    pub copied_label: String,
    pub code_label: String,
    pub invalid_video_url: String,
    pub video_insert_failed: String,
    pub images_only: String,
    pub upload_succeeded: String,
    pub upload_failed: String,
    pub uploaded_image_alt: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            copy_label: "Copier".to_string(),
            copied_label: "Copié !".to_string(),
            code_label: "Code".to_string(),
            invalid_video_url: "URL YouTube invalide".to_string(),
            video_insert_failed: "Impossible d'insérer la vidéo YouTube".to_string(),
            images_only: "Veuillez déposer uniquement des images".to_string(),
            upload_succeeded: "Image(s) téléchargée(s) avec succès".to_string(),
            upload_failed: "Erreur lors du téléchargement des images".to_string(),
            uploaded_image_alt: "Image téléchargée".to_string(),
        }
    }
}
