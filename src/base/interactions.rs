//! Base interactions: provider, signer and everything shared by token wrappers.
//!
//! # Responsibilities
//! - Hold the provider handle and the signing key
//! - Build transaction and call options
//! - Sign, broadcast and wait for transactions
//! - Check that a contract exposes the expected selectors

use std::sync::Arc;
use std::time::Duration;

use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::signers::local::PrivateKeySigner;
use tokio::time::{interval, timeout};

use crate::base::call_errors::match_errors;
use crate::base::session::{BoundContract, Session};
use crate::base::transaction;
use crate::base::types::{
    CallOpts, InteractionError, InteractionResult, InterfacingError, SharedProvider, TxOpts,
    TxOptsBuilder,
};
use crate::config::ClientConfig;
use crate::contracts::IDisperse;
use crate::signatures::Signature;
use crate::utils::proxy::{check_diamond_function, implementation_address};
use crate::utils::to_ether;

const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Provider, signer and options shared by every contract wrapper.
#[derive(Clone)]
pub struct Interactions {
    provider: SharedProvider,
    wallet: EthereumWallet,
    address: Address,
    explorer: Option<String>,
    safe: bool,
    tx_opts_fn: Option<TxOptsBuilder>,
    disperse: Option<Address>,
    confirmation_timeout: Duration,
    poll_interval: Duration,
}

impl Interactions {
    /// Create interactions for `signer` over `provider`.
    ///
    /// The provider is queried once for the latest block to make sure it is reachable.
    pub async fn new(provider: SharedProvider, signer: PrivateKeySigner) -> InteractionResult<Self> {
        let block_number = provider
            .get_block_number()
            .await
            .map_err(|source| InteractionError::Setup {
                step: "reach the RPC endpoint",
                source,
            })?;
        let address = signer.address();

        tracing::info!(address = %address, block_number, "Interactions initialized");

        Ok(Self {
            provider,
            wallet: EthereumWallet::from(signer),
            address,
            explorer: None,
            safe: false,
            tx_opts_fn: None,
            disperse: None,
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Connect over HTTP using a validated configuration.
    pub async fn connect(config: &ClientConfig, signer: PrivateKeySigner) -> InteractionResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            InteractionError::Config(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        let provider: SharedProvider = Arc::new(ProviderBuilder::new().connect_http(url));

        Self::from_config(provider, config, signer).await
    }

    /// Apply the chain ID check and the explorer, safe mode, disperse and
    /// confirmation settings of `config` over an existing provider.
    pub async fn from_config(
        provider: SharedProvider,
        config: &ClientConfig,
        signer: PrivateKeySigner,
    ) -> InteractionResult<Self> {
        let mut interactions = Self::new(provider, signer)
            .await?
            .with_safe_mode(config.safe_mode)
            .with_confirmation(
                Duration::from_secs(config.confirmation_timeout_secs),
                Duration::from_millis(config.poll_interval_ms),
            );

        if let Some(expected) = config.chain_id {
            let actual = interactions.chain_id().await?;
            if actual != expected {
                return Err(InteractionError::ChainMismatch { expected, actual });
            }
        }
        if let Some(explorer) = &config.explorer_url {
            interactions = interactions.with_explorer(explorer.clone());
        }
        if let Some(disperse) = &config.disperse_address {
            let address = disperse.parse().map_err(|e| {
                InteractionError::Config(format!("Invalid disperse address '{}': {}", disperse, e))
            })?;
            interactions = interactions.with_disperse(address);
        }

        Ok(interactions)
    }

    /// Format mined transactions as `<explorer>/tx/<hash>`.
    pub fn with_explorer(mut self, explorer: impl Into<String>) -> Self {
        self.explorer = Some(explorer.into());
        self
    }

    /// Simulate every transaction before sending it.
    pub fn with_safe_mode(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }

    /// Replace the default transaction options setup.
    pub fn with_tx_opts_builder<F>(mut self, builder: F) -> Self
    where
        F: Fn() -> InteractionResult<TxOpts> + Send + Sync + 'static,
    {
        self.tx_opts_fn = Some(Arc::new(builder));
        self
    }

    /// Use fixed transaction options for every transaction.
    pub fn with_tx_opts(self, opts: TxOpts) -> Self {
        self.with_tx_opts_builder(move || Ok(opts.clone()))
    }

    /// Address of the Disperse contract used by [`Self::disperse`].
    pub fn with_disperse(mut self, address: Address) -> Self {
        self.disperse = Some(address);
        self
    }

    /// How long and how often [`Self::catch_tx`] polls for a receipt.
    pub fn with_confirmation(mut self, timeout: Duration, poll_interval: Duration) -> Self {
        self.confirmation_timeout = timeout;
        self.poll_interval = poll_interval;
        self
    }

    /// Sender address derived from the signer.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &(dyn Provider + Send + Sync) {
        self.provider.as_ref()
    }

    /// Whether transactions are simulated before being sent.
    pub fn safe(&self) -> bool {
        self.safe
    }

    pub fn explorer(&self) -> Option<&str> {
        self.explorer.as_deref()
    }

    pub async fn chain_id(&self) -> InteractionResult<u64> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|source| InteractionError::Setup {
                step: "get chain ID",
                source,
            })
    }

    /// Transaction options: the injected builder when set, otherwise gas
    /// price, pending nonce and chain ID read from the node.
    pub async fn base_tx_setup(&self) -> InteractionResult<TxOpts> {
        if let Some(builder) = &self.tx_opts_fn {
            return builder();
        }

        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .map_err(|source| InteractionError::Setup {
                step: "suggest gas price",
                source,
            })?;
        let nonce = self
            .provider
            .get_transaction_count(self.address)
            .pending()
            .await
            .map_err(|source| InteractionError::Setup {
                step: "get user nonce",
                source,
            })?;
        let chain_id = self.chain_id().await?;

        Ok(TxOpts {
            from: self.address,
            nonce,
            gas_price,
            gas_limit: None,
            value: U256::ZERO,
            chain_id,
        })
    }

    /// Options for read-only calls against the latest block.
    pub fn base_call_setup(&self) -> CallOpts {
        CallOpts {
            from: self.address,
            pending: false,
        }
    }

    /// Session for `address` with the default call options.
    pub fn session(&self, address: Address) -> Session {
        self.session_with(address, self.base_call_setup())
    }

    /// Session for `address` with explicit call options.
    pub fn session_with(&self, address: Address, call_opts: CallOpts) -> Session {
        Session::new(call_opts, BoundContract::new(address, self.provider.clone()))
    }

    /// Sign `input` for `to` with `opts` and broadcast it.
    ///
    /// The gas limit is estimated when `opts` has none.
    pub async fn send_transaction(
        &self,
        to: Address,
        input: Bytes,
        opts: TxOpts,
    ) -> InteractionResult<TxHash> {
        let mut tx = TransactionRequest::default()
            .with_from(opts.from)
            .with_to(to)
            .with_input(input)
            .with_value(opts.value)
            .with_nonce(opts.nonce)
            .with_gas_price(opts.gas_price)
            .with_chain_id(opts.chain_id);

        let gas_limit = match opts.gas_limit {
            Some(limit) => limit,
            None => self.provider.estimate_gas(tx.clone()).await?,
        };
        tx.set_gas_limit(gas_limit);

        let envelope = tx
            .build(&self.wallet)
            .await
            .map_err(|e| InteractionError::Signing(e.to_string()))?;

        let pending = self
            .provider
            .send_raw_transaction(&envelope.encoded_2718())
            .await
            .map_err(|e| InteractionError::Setup {
                step: "send the tx",
                source: e,
            })?;
        let tx_hash = *pending.tx_hash();

        tracing::info!(
            tx_hash = %tx_hash,
            to = %to,
            nonce = opts.nonce,
            gas_limit,
            "Transaction broadcast"
        );

        Ok(tx_hash)
    }

    /// Wait for a transaction to be mined.
    ///
    /// Returns the hash, or its explorer URL when an explorer is configured.
    pub async fn catch_tx(&self, tx_hash: TxHash) -> InteractionResult<String> {
        let receipt = self.wait_for_receipt(tx_hash).await?;
        if !receipt.status() {
            return Err(InteractionError::Reverted(tx_hash));
        }

        tracing::info!(
            tx_hash = %tx_hash,
            block_number = receipt.block_number,
            "Transaction mined"
        );

        Ok(match &self.explorer {
            Some(explorer) => format!("{}/tx/{}", explorer.trim_end_matches('/'), tx_hash),
            None => tx_hash.to_string(),
        })
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> InteractionResult<TransactionReceipt> {
        match timeout(self.confirmation_timeout, self.poll_receipt(tx_hash)).await {
            Ok(receipt) => receipt,
            Err(_) => Err(InteractionError::ConfirmationTimeout(
                tx_hash,
                self.confirmation_timeout.as_secs(),
            )),
        }
    }

    async fn poll_receipt(&self, tx_hash: TxHash) -> InteractionResult<TransactionReceipt> {
        let mut ticker = interval(self.poll_interval.max(Duration::from_millis(1)));

        loop {
            ticker.tick().await;

            match self.provider.get_transaction_receipt(tx_hash).await {
                Ok(Some(receipt)) => return Ok(receipt),
                Ok(None) => tracing::debug!(tx_hash = %tx_hash, "Transaction pending"),
                Err(e) => tracing::debug!(
                    tx_hash = %tx_hash,
                    error = %e,
                    "Receipt lookup failed, retrying"
                ),
            }
        }
    }

    /// Simulate a call from the sender to check that it would not revert.
    pub async fn verify_transaction(
        &self,
        to: Address,
        data: Bytes,
        value: U256,
    ) -> InteractionResult<()> {
        let tx = TransactionRequest::default()
            .with_from(self.address)
            .with_to(to)
            .with_input(data)
            .with_value(value);

        self.provider.call(tx).await?;
        Ok(())
    }

    /// Split `total_value` evenly between `recipients` through the Disperse contract.
    pub async fn disperse(
        &self,
        recipients: &[Address],
        total_value: U256,
    ) -> InteractionResult<String> {
        let disperse = self.disperse.ok_or(InteractionError::DisperseNotInitialized)?;
        if recipients.is_empty() {
            return Err(InteractionError::NoRecipients);
        }

        let share = total_value / U256::from(recipients.len());
        let call = IDisperse::disperseEtherCall {
            recipients: recipients.to_vec(),
            values: vec![share; recipients.len()],
        };

        tracing::info!(
            recipients = recipients.len(),
            total_value = %total_value,
            "Dispersing"
        );

        let tx_hash =
            transaction::transact(self, &self.session(disperse), &call, total_value).await?;
        self.catch_tx(tx_hash).await
    }

    /// Send `values[i]` of `token` to `recipients[i]` through the Disperse contract.
    ///
    /// The Disperse contract must already be approved for the total.
    pub async fn disperse_token(
        &self,
        token: Address,
        recipients: &[Address],
        values: &[U256],
    ) -> InteractionResult<String> {
        let disperse = self.disperse.ok_or(InteractionError::DisperseNotInitialized)?;
        if recipients.is_empty() {
            return Err(InteractionError::NoRecipients);
        }
        if recipients.len() != values.len() {
            return Err(InteractionError::RecipientsValuesMismatch {
                recipients: recipients.len(),
                values: values.len(),
            });
        }

        let call = IDisperse::disperseTokenCall {
            token,
            recipients: recipients.to_vec(),
            values: values.to_vec(),
        };

        let tx_hash =
            transaction::transact(self, &self.session(disperse), &call, U256::ZERO).await?;
        self.catch_tx(tx_hash).await
    }

    /// Send the whole balance minus the transfer fees to `to`.
    pub async fn send_all_funds(&self, to: Address) -> InteractionResult<TxHash> {
        let balance = self.provider.get_balance(self.address).await?;
        let gas_limit = self.estimate_transfer_gas(to, U256::ZERO).await?;
        let gas_price = self.provider.get_gas_price().await?;

        let fees = U256::from(gas_limit) * U256::from(gas_price);
        if fees >= balance {
            return Err(InteractionError::FeesExceedBalance {
                fees: to_ether(fees),
                balance: to_ether(balance),
            });
        }

        self.send_value(to, balance - fees, gas_limit, gas_price).await
    }

    /// Transfer ether to `to` after checking that the balance covers value and fees.
    pub async fn transfer_eth(&self, to: Address, value: U256) -> InteractionResult<TxHash> {
        let balance = self.provider.get_balance(self.address).await?;
        let gas_limit = self.estimate_transfer_gas(to, value).await?;
        let gas_price = self.provider.get_gas_price().await?;

        let fees = U256::from(gas_limit) * U256::from(gas_price);
        match value.checked_add(fees) {
            Some(required) if required <= balance => {}
            required => {
                return Err(InteractionError::InsufficientBalance {
                    required: required.map_or(f64::INFINITY, to_ether),
                    balance: to_ether(balance),
                })
            }
        }

        self.send_value(to, value, gas_limit, gas_price).await
    }

    async fn estimate_transfer_gas(&self, to: Address, value: U256) -> InteractionResult<u64> {
        let tx = TransactionRequest::default()
            .with_from(self.address)
            .with_to(to)
            .with_value(value);
        Ok(self.provider.estimate_gas(tx).await?)
    }

    async fn send_value(
        &self,
        to: Address,
        value: U256,
        gas_limit: u64,
        gas_price: u128,
    ) -> InteractionResult<TxHash> {
        let nonce = self
            .provider
            .get_transaction_count(self.address)
            .pending()
            .await?;
        let chain_id = self.chain_id().await?;

        let opts = TxOpts {
            from: self.address,
            nonce,
            gas_price,
            gas_limit: Some(gas_limit),
            value,
            chain_id,
        };
        self.send_transaction(to, Bytes::new(), opts).await
    }

    /// Check that `contract` exposes every selector of `signatures`.
    ///
    /// Selectors missing from the contract bytecode are looked up in its
    /// EIP-1967 implementation when there is one, otherwise through the
    /// diamond loupe.
    pub async fn check_signatures<S: Signature>(
        &self,
        contract: Address,
        signatures: &[S],
    ) -> Result<(), InterfacingError> {
        let wrap = |err: InteractionError| InterfacingError::new("CheckSignatures", err);

        let code = self
            .provider
            .get_code_at(contract)
            .await
            .map_err(|source| {
                wrap(InteractionError::Setup {
                    step: "get contract bytecode",
                    source,
                })
            })?;

        let missing: Vec<&S> = signatures
            .iter()
            .filter(|sig| !contains_selector(&code, sig))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        let implementation = implementation_address(self.provider(), contract)
            .await
            .map_err(wrap)?;

        let mut unsupported = Vec::new();
        if implementation != Address::ZERO {
            tracing::debug!(
                proxy = %contract,
                implementation = %implementation,
                "Checking selectors against proxy implementation"
            );
            match self.provider.get_code_at(implementation).await {
                Ok(code) => unsupported.extend(
                    missing
                        .into_iter()
                        .filter(|sig| !contains_selector(&code, sig)),
                ),
                Err(e) => {
                    tracing::warn!(
                        implementation = %implementation,
                        error = %e,
                        "Failed to get implementation bytecode"
                    );
                    unsupported.extend(missing);
                }
            }
        } else {
            for sig in missing {
                match check_diamond_function(self.provider(), contract, sig.selector()).await {
                    Ok(true) => {}
                    Ok(false) => unsupported.push(sig),
                    Err(e) => {
                        tracing::debug!(
                            contract = %contract,
                            signature = sig.text(),
                            error = %e,
                            "Diamond facet lookup failed"
                        );
                        unsupported.push(sig);
                    }
                }
            }
        }

        if unsupported.is_empty() {
            return Ok(());
        }

        let unsupported = unsupported
            .iter()
            .map(|sig| format!("{}: {}", sig.text(), sig.hex()))
            .collect();
        Err(wrap(InteractionError::UnsupportedFunctions(unsupported)))
    }

    /// Replace an RPC revert error by the name of the matching custom error of `abi_json`.
    ///
    /// Errors without revert data, or whose selector is not in the ABI, are returned as is.
    pub fn manage_custom_contract_error(
        &self,
        abi_json: &str,
        err: InteractionError,
    ) -> InteractionError {
        if abi_json.is_empty() {
            return err;
        }
        let Some(data) = err.revert_data() else {
            return err;
        };

        match match_errors(abi_json, &data) {
            Ok(Some(name)) => InteractionError::ContractRevert(name),
            Ok(None) => err,
            Err(e) => InterfacingError::new("MatchErrors", e).into(),
        }
    }
}

fn contains_selector<S: Signature + ?Sized>(code: &[u8], signature: &S) -> bool {
    let selector = signature.selector();
    code.windows(selector.len())
        .any(|window| window == selector.as_slice())
}

impl std::fmt::Debug for Interactions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interactions")
            .field("address", &self.address)
            .field("explorer", &self.explorer)
            .field("safe", &self.safe)
            .field("custom_tx_opts", &self.tx_opts_fn.is_some())
            .field("disperse", &self.disperse)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signatures::RawSignature;

    #[test]
    fn test_contains_selector() {
        let sig = RawSignature::from("name()");
        let code = [0x60, 0x80, 0x63, 0x06, 0xfd, 0xde, 0x03, 0x14];
        assert!(contains_selector(&code, &sig));
        assert!(!contains_selector(&code[..5], &sig));
        assert!(!contains_selector(&[], &sig));
    }
}
