use std::sync::{Arc, Mutex};

use portugalex_wizard_core::{
    PortError, SessionPort, SessionSnapshot, BITCOIN_MAINNET_CAIP2, SIWX_CACHE_KEY,
};

use crate::cache::MemoryCacheAdapter;

/// Mock Wallet Session Provider. In production this role belongs to the
/// wallet-connection SDK; the demo drives it from its own connect/sign
/// buttons. Writes the SIWX record into the shared cache the way the SDK
/// does, so the wizard's polling path is exercised for real.
#[derive(Debug, Clone)]
pub struct MockWalletAdapter {
    session: Arc<Mutex<SessionSnapshot>>,
    cache: MemoryCacheAdapter,
}

impl MockWalletAdapter {
    pub fn new(cache: MemoryCacheAdapter) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionSnapshot {
                connected: false,
                address: None,
                chain_id: Some(BITCOIN_MAINNET_CAIP2.to_owned()),
            })),
            cache,
        }
    }

    pub fn connect(&self, address: &str, chain_id: &str) -> Result<(), PortError> {
        let mut session = self.lock()?;
        session.connected = true;
        session.address = Some(address.to_owned());
        session.chain_id = Some(chain_id.to_owned());
        Ok(())
    }

    /// Drops the session and the cached SIWX record, the way the SDK's
    /// sign-out does.
    pub fn disconnect(&self) -> Result<(), PortError> {
        {
            let mut session = self.lock()?;
            session.connected = false;
            session.address = None;
        }
        self.cache.remove(SIWX_CACHE_KEY)
    }

    pub fn select_network(&self, chain_id: &str) -> Result<(), PortError> {
        self.lock()?.chain_id = Some(chain_id.to_owned());
        Ok(())
    }

    /// Simulates the out-of-band signing interaction completing: the SDK
    /// caches the signed ownership proof as a one-element JSON array.
    pub fn record_siwx_proof(&self, signature: &str) -> Result<(), PortError> {
        let session = self.lock()?.clone();
        let payload = serde_json::json!([{
            "signature": signature,
            "address": session.address,
            "chainId": session.chain_id,
        }]);
        self.cache.set(SIWX_CACHE_KEY, &payload.to_string())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SessionSnapshot>, PortError> {
        self.session
            .lock()
            .map_err(|_| PortError::Transport("session store poisoned".to_owned()))
    }
}

impl SessionPort for MockWalletAdapter {
    fn session(&self) -> Result<SessionSnapshot, PortError> {
        Ok(self.lock()?.clone())
    }

    fn active_chain(&self) -> Result<Option<String>, PortError> {
        Ok(self.lock()?.chain_id.clone())
    }
}
