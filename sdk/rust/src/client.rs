use reqwest::{Client, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};

/// Album as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("base url cannot carry a path: {0}")]
    NotABase(Url),
}

pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::NotABase(base_url));
        }
        Ok(Self { client, base_url })
    }

    /// `<base>/albums[/<segment>...]`, with each segment percent-encoded.
    fn albums_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::NotABase(self.base_url.clone()))?
            .pop_if_empty()
            .push("albums")
            .extend(segments);
        Ok(url)
    }

    /// Every album, in catalog order.
    pub async fn list_albums(&self) -> Result<Vec<Album>, ClientError> {
        let resp = self.client.get(self.albums_url(&[])?).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// The first album with `id`, or `None` when the catalog has none.
    pub async fn get_album(&self, id: &str) -> Result<Option<Album>, ClientError> {
        let resp = self.client.get(self.albums_url(&[id])?).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(check(resp).await?.json().await?))
    }

    /// Append an album; returns the album echoed by the server.
    pub async fn create_album(&self, album: &Album) -> Result<Album, ClientError> {
        let resp = self
            .client
            .post(self.albums_url(&[])?)
            .json(album)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.message,
        Err(_) => text,
    };
    Err(ClientError::Status { status, message })
}
