//! Scenario catalogue for the folder operations of the resource endpoint.
//!
//! Several expectations accept more than one status. The service answers
//! these edge cases differently depending on account state, so each set is
//! the full range of documented answers and must not be narrowed.

use diskcheck_domain::{
    AuthMode, OAuthToken,
    request::ResourceRequest,
    scenario::{Scenario, Step},
    testing::Assertion,
};

use crate::error::ApplicationResult;

/// Folder targeted by scenarios 01 to 09.
pub const DEFAULT_TEST_FOLDER: &str = "test_folder";
/// Folder targeted by the lifecycle scenario.
pub const DEFAULT_LIFECYCLE_FOLDER: &str = "integration_test_folder";
/// A path whose parent folders do not exist.
pub const INVALID_FOLDER: &str = "invalid/folder/name";
/// Child created under the test folder by the nested scenario.
pub const NESTED_FOLDER: &str = "nested_subfolder";
/// A folder name made of characters reserved in URLs.
pub const SPECIAL_FOLDER: &str = "test_folder_@#$%^&";
/// A well-formed token the service does not know.
pub const INVALID_TOKEN: &str = "invalid_token_12345";

/// Folder names the catalogue works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueOptions {
    /// Target of the single-folder scenarios.
    pub test_folder: String,
    /// Target of the lifecycle scenario.
    pub lifecycle_folder: String,
}

impl Default for CatalogueOptions {
    fn default() -> Self {
        Self {
            test_folder: DEFAULT_TEST_FOLDER.to_string(),
            lifecycle_folder: DEFAULT_LIFECYCLE_FOLDER.to_string(),
        }
    }
}

/// Builds the ten folder scenarios, in execution order.
///
/// # Errors
///
/// Returns an error if a built-in token cannot be constructed.
pub fn catalogue(options: &CatalogueOptions) -> ApplicationResult<Vec<Scenario>> {
    let folder = options.test_folder.as_str();
    let lifecycle = options.lifecycle_folder.as_str();
    let invalid_token = OAuthToken::new(INVALID_TOKEN)?;

    Ok(vec![
        Scenario::new("test_01_create_folder_success", "Create new folder")
            .with_step(Step::checked(
                "create",
                ResourceRequest::create(folder),
                vec![Assertion::status(201)],
            ))
            .with_step(Step::checked(
                "read",
                ResourceRequest::read(folder),
                vec![Assertion::status(200)],
            ))
            .with_teardown(folder),
        Scenario::new(
            "test_02_create_folder_already_exists",
            "Create existing folder",
        )
        .with_step(Step::unchecked("create", ResourceRequest::create(folder)))
        .with_step(Step::checked(
            "create again",
            ResourceRequest::create(folder),
            vec![Assertion::status(409)],
        ))
        .with_teardown(folder),
        Scenario::new(
            "test_03_create_folder_unauthorized",
            "Create without auth header",
        )
        .with_step(Step::checked(
            "create",
            ResourceRequest::create(folder).with_auth(AuthMode::Missing),
            vec![Assertion::status(401)],
        ))
        .with_teardown(folder),
        Scenario::new(
            "test_04_create_folder_invalid_name",
            "Create with invalid path",
        )
        .with_step(Step::checked(
            "create",
            ResourceRequest::create(INVALID_FOLDER),
            vec![Assertion::status_in(&[400, 409])],
        ))
        .with_teardown(folder),
        Scenario::new(
            "test_05_create_folder_invalid_token",
            "Create with invalid token",
        )
        .with_step(Step::checked(
            "create",
            ResourceRequest::create(folder).with_auth(AuthMode::Override(invalid_token)),
            vec![Assertion::status(401)],
        ))
        .with_teardown(folder),
        Scenario::new(
            "test_06_create_folder_nested_success",
            "Create nested folder",
        )
        .with_step(Step::checked(
            "create",
            ResourceRequest::create(format!("{folder}/{NESTED_FOLDER}")),
            vec![Assertion::status_in(&[201, 409])],
        ))
        .with_teardown(folder),
        Scenario::new("test_07_get_folder_info_success", "Get folder info after create")
            .with_step(Step::unchecked("create", ResourceRequest::create(folder)))
            .with_step(Step::checked(
                "read",
                ResourceRequest::read(folder),
                vec![
                    Assertion::status(200),
                    Assertion::IsJson,
                    Assertion::json_field("type", "dir"),
                    Assertion::json_field("name", folder),
                ],
            ))
            .with_teardown(folder),
        Scenario::new("test_08_create_folder_empty_name", "Create with empty path")
            .with_step(Step::checked(
                "create",
                ResourceRequest::create(""),
                vec![Assertion::status(400)],
            ))
            .with_teardown(folder),
        Scenario::new(
            "test_09_create_folder_special_characters",
            "Create with special characters",
        )
        .with_step(Step::checked(
            "create",
            ResourceRequest::create(SPECIAL_FOLDER),
            vec![Assertion::status_in(&[201, 400, 409])],
        ))
        .with_teardown(SPECIAL_FOLDER)
        .with_teardown(folder),
        Scenario::new("test_full_folder_lifecycle", "Full lifecycle")
            .with_step(Step::checked(
                "create",
                ResourceRequest::create(lifecycle),
                vec![Assertion::status(201)],
            ))
            .with_step(Step::checked(
                "read",
                ResourceRequest::read(lifecycle),
                vec![Assertion::status(200)],
            ))
            .with_step(Step::checked(
                "delete",
                ResourceRequest::delete(lifecycle),
                vec![Assertion::status(204)],
            ))
            .with_step(Step::checked(
                "read deleted",
                ResourceRequest::read(lifecycle),
                vec![Assertion::status(404)],
            ))
            .with_teardown(lifecycle),
    ])
}
