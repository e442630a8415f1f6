use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampMs(pub u64);

/// Cache key under which the wallet SDK stores the sign-in-with-X record.
pub const SIWX_CACHE_KEY: &str = "@appkit/siwx";

/// How often the ownership-proof cache is polled, in milliseconds.
pub const PROOF_POLL_INTERVAL_MS: u64 = 1_000;

/// Simulated network latency between confirming a withdrawal and the
/// completion card, in milliseconds.
pub const SUBMIT_DELAY_MS: u64 = 2_000;

/// Fixed transaction hash shown on the completion card. The demo never
/// broadcasts anything.
pub const MOCK_TX_HASH: &str =
    "0x9a8b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f7c6d";

/// CAIP-2 identifier for Bitcoin mainnet as reported by the wallet SDK.
pub const BITCOIN_MAINNET_CAIP2: &str = "bip122:000000000019d6689c085ae165831e93";
/// CAIP-2 identifier for Bitcoin testnet.
pub const BITCOIN_TESTNET_CAIP2: &str = "bip122:000000000933ea01ad0ee984209779ba";

/// The four wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Connect,
    Verify,
    Amount,
    Complete,
}

impl WizardStep {
    /// 1-based position, used for the step badges.
    pub fn index(&self) -> u8 {
        match self {
            WizardStep::Connect => 1,
            WizardStep::Verify => 2,
            WizardStep::Amount => 3,
            WizardStep::Complete => 4,
        }
    }
}

/// Wizard-owned state. Mutated only by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub connected: bool,
    pub address: Option<String>,
    pub ownership_verified: bool,
    pub amount: String,
    pub is_loading: bool,
    pub withdrawal_complete: bool,
    pub updated_at_ms: TimestampMs,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::Connect,
            connected: false,
            address: None,
            ownership_verified: false,
            amount: String::new(),
            is_loading: false,
            withdrawal_complete: false,
            updated_at_ms: TimestampMs(0),
        }
    }
}

impl WizardState {
    /// Back to initial values. The provider's own session is untouched.
    pub fn reset(&mut self) {
        let updated_at_ms = self.updated_at_ms;
        *self = Self::default();
        self.updated_at_ms = updated_at_ms;
    }

    /// Drop everything tied to the connection: address, verification flag
    /// and any in-flight submission.
    pub fn clear_connection(&mut self) {
        self.step = WizardStep::Connect;
        self.connected = false;
        self.address = None;
        self.ownership_verified = false;
        self.is_loading = false;
    }
}

/// Read-only view of the external wallet session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub connected: bool,
    pub address: Option<String>,
    pub chain_id: Option<String>,
}

/// Decoded ownership-proof cache entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OwnershipProof {
    pub signature: Option<String>,
    pub raw: Option<Value>,
}

impl OwnershipProof {
    pub fn is_verified(&self) -> bool {
        self.signature.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Decode the cached SIWX payload. The SDK writes a JSON array; the first
/// element's `signature` field is the proof. This never fails: anything
/// malformed decodes to an unverified proof.
pub fn decode_proof(raw: &str) -> OwnershipProof {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return OwnershipProof::default(),
    };
    let signature = value
        .as_array()
        .and_then(|entries| entries.first())
        .and_then(|entry| entry.get("signature"))
        .and_then(|sig| sig.as_str())
        .map(str::to_owned);
    OwnershipProof {
        signature,
        raw: Some(value),
    }
}

/// Display-ready asset facts derived from the active network. Mock figures;
/// the demo holds no balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetProfile {
    pub symbol: &'static str,
    pub name: &'static str,
    pub balance: &'static str,
    pub network_fee: &'static str,
    pub min_amount: &'static str,
    pub max_amount: &'static str,
}

const BITCOIN_PROFILE: AssetProfile = AssetProfile {
    symbol: "BTC",
    name: "Bitcoin",
    balance: "0.5",
    network_fee: "0.0001",
    min_amount: "0.0001",
    max_amount: "0.5",
};

const SECONDARY_PROFILE: AssetProfile = AssetProfile {
    symbol: "ETH",
    name: "Ethereum",
    balance: "2.0",
    network_fee: "0.002",
    min_amount: "0.001",
    max_amount: "2.0",
};

/// Pure mapping from chain identifier to asset profile. Recomputed on every
/// call; never cached.
pub fn asset_profile_for_chain(chain_id: Option<&str>) -> AssetProfile {
    match chain_id {
        Some(BITCOIN_MAINNET_CAIP2) | Some(BITCOIN_TESTNET_CAIP2) => BITCOIN_PROFILE,
        _ => SECONDARY_PROFILE,
    }
}

/// The confirm gate: a strictly positive, finite number. The min/max labels
/// shown next to the input are illustrative only and are not enforced here.
pub fn is_valid_amount(amount: &str) -> bool {
    amount
        .trim()
        .parse::<f64>()
        .map(|v| v.is_finite() && v > 0.0)
        .unwrap_or(false)
}
