//! The error envelope returned to clients: `{"errors": [{"code", "message"}]}`.

/// Machine-readable codes carried in [`ErrorMessage::code`].
pub mod codes {
    pub const INVALID_TITLE: &str = "InvalidTitle";
    pub const INVALID_BODY: &str = "InvalidBody";
    pub const TITLE_IS_DUPLICATED: &str = "TitleIsDuplicated";
    pub const ID_IS_DUPLICATED: &str = "IDIsDuplicated";
    pub const MEMO_ID_FORMAT_IS_INVALID: &str = "MEMO_ID_FORMAT_IS_INVALID";
    pub const NOT_FOUND: &str = "NotFound";
    pub const INTERNAL_SERVER_ERROR: &str = "InternalServerError";
    pub const INVALID_METHOD: &str = "INVALID_METHOD";
    pub const INVALID_CONTENT_TYPE: &str = "INVALID_CONTENT_TYPE";
    pub const INVALID_JSON: &str = "INVALID_JSON";
    pub const PAYLOAD_TOO_LARGE: &str = "PAYLOAD_TOO_LARGE";
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal_server_error() -> Self {
        Self::new(codes::INTERNAL_SERVER_ERROR, "内部エラーが発生しました。")
    }

    /// Used whenever the memo an operation targets does not exist.
    pub fn not_found() -> Self {
        Self::new(codes::NOT_FOUND, "対象のメモはありません")
    }

    pub fn invalid_memo_id() -> Self {
        Self::new(codes::MEMO_ID_FORMAT_IS_INVALID, "対象のメモは存在しません。")
    }

    pub fn title_is_duplicated() -> Self {
        Self::new(codes::TITLE_IS_DUPLICATED, "同じタイトルのメモが既に存在します")
    }

    pub fn id_is_duplicated() -> Self {
        Self::new(codes::ID_IS_DUPLICATED, "同じIDのメモが既に存在します")
    }

    pub fn invalid_method() -> Self {
        Self::new(codes::INVALID_METHOD, "このHTTPメソッドには対応していません")
    }

    pub fn invalid_content_type() -> Self {
        Self::new(
            codes::INVALID_CONTENT_TYPE,
            "Content-Type は application/json にしてください",
        )
    }

    pub fn invalid_json() -> Self {
        Self::new(codes::INVALID_JSON, "リクエストの形式が正しくありません")
    }

    pub fn payload_too_large() -> Self {
        Self::new(codes::PAYLOAD_TOO_LARGE, "リクエストが大きすぎます")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorMessage>,
}

impl ErrorResponse {
    pub fn new(errors: Vec<ErrorMessage>) -> Self {
        Self { errors }
    }

    pub fn single(error: ErrorMessage) -> Self {
        Self::new(vec![error])
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}
