use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use dramlog_models::ReviewInput;
use tracing::debug;

/// Encodes review content into an opaque token that can ride in a URL
/// query parameter: JSON, percent-encoded, then URL-safe base64.
pub fn encode_review(input: &ReviewInput) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(input)?;
    let encoded = urlencoding::encode(&json);
    Ok(URL_SAFE.encode(encoded.as_bytes()))
}

/// Inverse of [`encode_review`]. Returns None on any malformed input -
/// bad base64, missing padding, bad UTF-8 or percent escapes, or a JSON
/// body that isn't a review payload. Never panics.
///
/// Tokens minted by the original web app used the standard base64
/// alphabet, so that is accepted as a fallback.
pub fn decode_review(token: &str) -> Option<ReviewInput> {
    let bytes = URL_SAFE
        .decode(token)
        .or_else(|_| STANDARD.decode(token))
        .ok()?;
    let percent_encoded = String::from_utf8(bytes).ok()?;
    let json = urlencoding::decode(&percent_encoded).ok()?;
    match serde_json::from_str(&json) {
        Ok(input) => Some(input),
        Err(e) => {
            debug!("share token JSON rejected: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dramlog_models::{
        BottlingType, FlavorEntry, FlavorSet, Notes, Rebuy, ReviewInput, ScoreCard, Whisky,
    };

    fn payload() -> ReviewInput {
        ReviewInput {
            reviewer: Some("은지".to_string()),
            whisky: Whisky {
                name: "Ardbeg Uigeadail".to_string(),
                distillery: "Ardbeg".to_string(),
                country: Some("SC".to_string()),
                abv: Some("54.2".to_string()),
                color: Some(1.1),
                bottling_type: Some(BottlingType::Official),
                ..Default::default()
            },
            scores: ScoreCard { nose: 23, palate: 22, finish: 23, balance: 22 },
            notes: Notes {
                nose: "석탄 연기, 건포도".to_string(),
                palate: "dark chocolate & brine".to_string(),
                finish: "long, ashy".to_string(),
                overall: Some("a \"desert island\" dram".to_string()),
            },
            flavors: FlavorSet {
                nose: vec![FlavorEntry::new("peat_smoke", 5), FlavorEntry::new("raisin", 3)],
                palate: vec![FlavorEntry::new("dark_chocolate", 4)],
                finish: vec![FlavorEntry::new("ash", 4)],
            },
            would_rebuy: Some(Rebuy::Yes),
        }
    }

    #[test]
    fn test_round_trip() {
        let input = payload();
        let token = encode_review(&input).unwrap();
        assert_eq!(decode_review(&token), Some(input));
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode_review(&payload()).unwrap();
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '=')));
    }

    #[test]
    fn test_malformed_tokens_decode_to_none() {
        assert_eq!(decode_review(""), None);
        assert_eq!(decode_review("not base64!!"), None);
        // valid base64, but the body is not a review payload
        assert_eq!(decode_review(&URL_SAFE.encode(b"[1,2,3]")), None);
        // truncated token loses padding
        let token = encode_review(&payload()).unwrap();
        assert_eq!(decode_review(&token[..token.len() - 3]), None);
    }

    #[test]
    fn test_accepts_standard_alphabet_tokens() {
        let json = serde_json::to_string(&payload()).unwrap();
        let legacy_token = STANDARD.encode(urlencoding::encode(&json).as_bytes());
        assert_eq!(decode_review(&legacy_token), Some(payload()));
    }

    #[test]
    fn test_legacy_flavor_shape_normalizes_on_decode() {
        let json = r#"{"whisky":{"name":"Yamazaki 12"},"scores":{"nose":20,"palate":20,"finish":20,"balance":20},"notes":{"nose":"","palate":"","finish":""},"flavors":{"nose":["honey"],"palate":[],"finish":[]}}"#;
        let token = URL_SAFE.encode(urlencoding::encode(json).as_bytes());
        let decoded = decode_review(&token).unwrap();
        assert_eq!(decoded.flavors.nose, vec![FlavorEntry::new("honey", 3)]);
    }
}
