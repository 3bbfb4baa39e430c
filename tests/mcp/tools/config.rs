use i18n_lens::mcp::{
    I18nLensMcpServer,
    types::{GetConfigParams, GetLanguagesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_namespace};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = fixture_multi_namespace().unwrap();
    let server = I18nLensMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["localesPath"], "public/locales");
    assert_eq!(json_result["config"]["defaultNamespace"], "common");
    assert_eq!(json_result["config"]["inlineLanguage"], "en");
    assert!(json_result["config"]["includes"].is_array());
    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["projectRoot"], fixture.root());
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "localesPath": "locales",
            "inlineLanguage": "de"
        }))
        .unwrap();

    let server = I18nLensMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["localesPath"], "locales");
    assert_eq!(json_result["config"]["inlineLanguage"], "de");
    assert_eq!(json_result["config"]["defaultNamespace"], "common");
}

#[tokio::test]
async fn test_get_config_invalid_root() {
    let server = I18nLensMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: "/definitely/not/a/project".to_string(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// get_languages tests
// ============================================================================

#[tokio::test]
async fn test_get_languages() {
    let fixture = fixture_multi_namespace().unwrap();
    let server = I18nLensMcpServer::new();

    let params = Parameters(GetLanguagesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_languages(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["languages"], json!(["de", "en"]));
    assert!(
        json_result["localesDir"]
            .as_str()
            .unwrap()
            .ends_with("public/locales")
    );
}

#[tokio::test]
async fn test_get_languages_without_locales_dir() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nLensMcpServer::new();

    let params = Parameters(GetLanguagesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_languages(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["languages"], json!([]));
    assert!(json_result["localesDir"].is_null());
}
