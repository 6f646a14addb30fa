use aws_sdk_s3 as s3;
use aws_sdk_s3::primitives::ByteStream;
use uuid::Uuid;

const DEFAULT_EXTENSION: &str = "jpg";

/// Storage key for an uploaded product image: a random name that keeps the
/// original file extension. Uniqueness rests on uuid v4 collision odds.
pub fn generate_object_key(file_name: Option<&str>) -> String {
    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    format!("products/{}.{}", Uuid::new_v4(), extension)
}

pub fn public_url(assets_url: &str, key: &str) -> String {
    format!("{}/{}", assets_url, key)
}

/// The storage key a public URL was minted from, when the URL belongs to our
/// assets host. Placeholder and foreign URLs yield `None`.
pub fn object_key_from_url<'a>(assets_url: &str, url: &'a str) -> Option<&'a str> {
    url.strip_prefix(assets_url)
        .map(|rest| rest.trim_start_matches('/'))
        .filter(|key| !key.is_empty())
}

pub async fn put_object(
    client: &s3::Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    body: Vec<u8>,
) -> Result<(), s3::Error> {
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .body(ByteStream::from(body))
        .send()
        .await?;

    Ok(())
}

pub async fn delete_object(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> Result<(), s3::Error> {
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_key_keeps_original_extension() {
        let key = generate_object_key(Some("vanille-bourbon.PNG"));
        assert!(key.starts_with("products/"));
        assert!(key.ends_with(".png"));
    }

    #[test]
    fn object_key_handles_dotted_names() {
        let key = generate_object_key(Some("photo.finale.tar.gz"));
        assert!(key.ends_with(".gz"));
    }

    #[test]
    fn object_key_defaults_without_extension() {
        assert!(generate_object_key(Some("raphia")).ends_with(".jpg"));
        assert!(generate_object_key(None).ends_with(".jpg"));
        assert!(generate_object_key(Some("trailing.")).ends_with(".jpg"));
    }

    #[test]
    fn object_keys_are_unique_per_call() {
        let a = generate_object_key(Some("a.jpg"));
        let b = generate_object_key(Some("a.jpg"));
        assert_ne!(a, b);
    }

    #[test]
    fn url_round_trips_to_key() {
        let url = public_url("https://assets.tsena.mg", "products/abc.jpg");
        assert_eq!(url, "https://assets.tsena.mg/products/abc.jpg");
        assert_eq!(
            object_key_from_url("https://assets.tsena.mg", &url),
            Some("products/abc.jpg")
        );
    }

    #[test]
    fn foreign_urls_have_no_key() {
        assert_eq!(
            object_key_from_url("https://assets.tsena.mg", "/placeholder.svg"),
            None
        );
    }
}
