// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Identity provider contract

use async_trait::async_trait;

/// Supplies the id of the signed-in user
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `None` when nobody is signed in
    async fn current_user_id(&self) -> Option<String>;
}

/// Identity fixed at construction, e.g. from `STRIDE_USER_ID` for the CLI
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user_id: Option<String>,
}

impl StaticIdentity {
    pub fn new(user_id: Option<String>) -> Self {
        Self {
            user_id: user_id.filter(|id| !id.trim().is_empty()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(crate::constants::env_config::user_id())
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_user_is_signed_out() {
        assert_eq!(StaticIdentity::new(Some("  ".to_string())).current_user_id().await, None);
        assert_eq!(StaticIdentity::default().current_user_id().await, None);
        assert_eq!(
            StaticIdentity::new(Some("runner-1".to_string())).current_user_id().await,
            Some("runner-1".to_string())
        );
    }
}
