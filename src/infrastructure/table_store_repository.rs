use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        error::RepositoryError,
        models::credential::{CredentialRecord, PasswordDigest},
        repositories::credential_repository::CredentialRepository,
    },
    infrastructure::config::TableStoreConfig,
};

// Wire types of the table service REST API.

#[derive(Deserialize)]
struct RecordList {
    records: Vec<RowRecord>,
}

#[derive(Deserialize)]
struct RowRecord {
    id: String,
    fields: RowFields,
}

#[derive(Deserialize)]
struct RowFields {
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
}

#[derive(Serialize)]
struct PatchBody<'a> {
    fields: PatchFields<'a>,
}

#[derive(Serialize)]
struct PatchFields<'a> {
    password: &'a str,
}

/// Credential repository backed by the hosted table service's REST API.
#[derive(Clone)]
pub struct RestTableCredentialRepository {
    client: Client,
    config: TableStoreConfig,
}

impl RestTableCredentialRepository {
    pub fn new(config: TableStoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table_name
        )
    }
}

#[async_trait]
impl CredentialRepository for RestTableCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<CredentialRecord, RepositoryError> {
        // Single quotes would terminate the filter formula string literal.
        let escaped = email.replace('\'', "\\'");
        let formula = format!("{{email}} = '{escaped}'");

        let response = self
            .client
            .get(self.table_url())
            .bearer_auth(&self.config.api_key)
            .query(&[("filterByFormula", formula.as_str())])
            .send()
            .await
            .map_err(|e| RepositoryError::StoreError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RepositoryError::StoreError(format!(
                "lookup returned {}",
                response.status()
            )));
        }

        let list: RecordList = response
            .json()
            .await
            .map_err(|e| RepositoryError::StoreError(e.to_string()))?;

        // First match wins; duplicate emails are undefined upstream.
        let row = list.records.into_iter().next().ok_or(RepositoryError::NotFound)?;

        Ok(CredentialRecord::new(
            row.id,
            row.fields.email.unwrap_or_else(|| email.to_string()),
            row.fields.name,
            row.fields.password.unwrap_or_default(),
        ))
    }

    async fn update_password(
        &self,
        record_id: &str,
        digest: &PasswordDigest,
    ) -> Result<(), RepositoryError> {
        let url = format!("{}/{}", self.table_url(), record_id);
        let body = PatchBody {
            fields: PatchFields {
                password: digest.as_str(),
            },
        };

        let response = self
            .client
            .patch(url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RepositoryError::StoreError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RepositoryError::StoreError(format!(
                "patch returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
