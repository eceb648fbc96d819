use poem_openapi::Object;

/// Inline image payload ready for direct rendering.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ImageDataResponse {
    pub success: bool,
    /// Self-contained `data:` string embedding the image bytes
    pub image_data: String,
}
