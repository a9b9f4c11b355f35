use std::fmt;
use std::path::PathBuf;

/// Whether the content is being indexed or used to search. Some embedding
/// models place the two in slightly different regions of the vector space
/// even for identical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingRole {
    Document,
    Query,
}

impl EmbeddingRole {
    /// Wire value understood by the embedding service.
    pub fn as_wire(&self) -> &'static str {
        match self {
            EmbeddingRole::Document => "search_document",
            EmbeddingRole::Query => "search_query",
        }
    }
}

/// Where an image lives. All three forms are normalized into the same
/// encoded payload before an embedding call.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    Local(PathBuf),
    ObjectStore(String),
    Url(String),
}

impl ImageRef {
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with("s3://") {
            ImageRef::ObjectStore(reference.to_string())
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            ImageRef::Url(reference.to_string())
        } else {
            ImageRef::Local(PathBuf::from(reference))
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Local(path) => write!(f, "{}", path.display()),
            ImageRef::ObjectStore(locator) => write!(f, "{locator}"),
            ImageRef::Url(url) => write!(f, "{url}"),
        }
    }
}

/// What to embed: a text description or an image reference, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddingInput {
    Text(String),
    Image(ImageRef),
}
