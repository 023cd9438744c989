use shared_types::InstitutionId;

use super::TokenService;
use super::dto::{DccTransactionDTO, TokenBalanceDTO};
use super::mapper::transaction_to_wire;
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};

impl TokenService {
    /// Credits DCC to an institution after an off-ledger settlement.
    /// Admin operation.
    pub async fn recharge(
        &self,
        institution_id: InstitutionId,
        form: DccTransactionDTO,
    ) -> Result<(), ServiceError> {
        throw_if_zero_amount(form.dcc_amount)?;

        self.ledger_client
            .recharge_dcc(institution_id.clone(), transaction_to_wire(form))
            .await?;

        tracing::info!(%institution_id, "DCC recharge recorded");
        Ok(())
    }

    /// Removes DCC from an institution after an off-ledger settlement.
    /// Admin operation.
    pub async fn deduct(
        &self,
        institution_id: InstitutionId,
        form: DccTransactionDTO,
    ) -> Result<(), ServiceError> {
        throw_if_zero_amount(form.dcc_amount)?;

        self.ledger_client
            .deduct_dcc(institution_id.clone(), transaction_to_wire(form))
            .await?;

        tracing::info!(%institution_id, "DCC deduction recorded");
        Ok(())
    }

    /// Books a token purchase for the signed-in institution.
    pub async fn buy(&self, amount: u64) -> Result<(), ServiceError> {
        throw_if_zero_amount(amount)?;
        let institution_id = self.current_institution()?;

        self.ledger_client
            .record_token_trading(institution_id, true, amount)
            .await
            .map_err(Into::into)
    }

    /// Books a token sale for the signed-in institution.
    pub async fn sell(&self, amount: u64) -> Result<(), ServiceError> {
        throw_if_zero_amount(amount)?;
        let institution_id = self.current_institution()?;

        self.ledger_client
            .record_token_trading(institution_id, false, amount)
            .await
            .map_err(Into::into)
    }

    /// Net balance of the signed-in institution. The ledger only keeps the
    /// bought and sold totals, the position is computed here.
    pub async fn get_balance(&self) -> Result<TokenBalanceDTO, ServiceError> {
        let institution_id = self.current_institution()?;
        let institution = self
            .ledger_client
            .get_institution(institution_id.clone())
            .await?
            .ok_or(ServiceError::EntityNotFound(
                EntityNotFoundError::Institution(institution_id),
            ))?;

        Ok(TokenBalanceDTO {
            dcc: institution.token_trading.bought as i64 - institution.token_trading.sold as i64,
        })
    }

    /// Adds to an institution's API call counter.
    pub async fn record_api_call(
        &self,
        institution_id: InstitutionId,
        count: u64,
    ) -> Result<(), ServiceError> {
        self.ledger_client
            .record_api_call(institution_id, count)
            .await
            .map_err(Into::into)
    }

    /// Adds to an institution's data upload counter.
    pub async fn record_data_upload(
        &self,
        institution_id: InstitutionId,
        count: u64,
    ) -> Result<(), ServiceError> {
        self.ledger_client
            .record_data_upload(institution_id, count)
            .await
            .map_err(Into::into)
    }

    fn current_institution(&self) -> Result<InstitutionId, ServiceError> {
        self.session_provider
            .session()
            .and_then(|session| session.institution_id)
            .ok_or_else(|| BusinessLogicError::NoActiveSession.into())
    }
}

fn throw_if_zero_amount(amount: u64) -> Result<(), ServiceError> {
    if amount == 0 {
        return Err(ValidationError::InvalidAmount(amount.to_string()).into());
    }
    Ok(())
}
