use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::pantry_item::expiry::{ExpiryAlert, expiry_alerts};
use crate::domain::pantry_item::use_cases::expiry_alerts::{
    GetExpiryAlertsParams, GetExpiryAlertsUseCase,
};
use crate::domain::policy::PantryPolicy;
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;

pub struct GetExpiryAlertsUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub policy: PantryPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetExpiryAlertsUseCase for GetExpiryAlertsUseCaseImpl {
    async fn execute(
        &self,
        params: GetExpiryAlertsParams,
    ) -> Result<Vec<ExpiryAlert>, PantryError> {
        let pantry = self
            .repository
            .get(&params.session_id)
            .await
            .map_err(PantryError::from_lookup)?;

        let alerts = expiry_alerts(
            pantry.inventory(),
            Utc::now(),
            self.policy.expiring_soon_days,
        );

        self.logger.debug(&format!(
            "{} expiry alerts for session {}",
            alerts.len(),
            params.session_id
        ));
        Ok(alerts)
    }
}
