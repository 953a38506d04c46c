use crate::ApiClient;

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://127.0.0.1:8000/").unwrap();
    assert_eq!(client.base_url, "http://127.0.0.1:8000");

    let client = ApiClient::new("https://portal.example.com").unwrap();
    assert_eq!(client.base_url, "https://portal.example.com");
}
