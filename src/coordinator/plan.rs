use std::sync::Arc;
use std::time::Duration;

use crate::config::constants::TOOLTIP_SETTLE_MS;
use crate::config::LookupConfig;
use crate::error::{GlossError, Result};
use crate::models::SourceId;
use crate::sources::{build_adapter, GatePredicate, HttpClient, SourceAdapter};

/// How the two sources of a plan are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Single,
    /// Secondary starts once Primary has settled and rendered
    Chained,
    /// Both start at once, Primary first
    Parallel,
}

/// Resolved lookup configuration: adapters in priority order plus the rules
/// for scheduling them.
#[derive(Clone)]
pub struct LookupPlan {
    primary: Arc<dyn SourceAdapter>,
    secondary: Option<Arc<dyn SourceAdapter>>,
    strategy: Strategy,
    gate: Option<GatePredicate>,
    secondary_timeout: Duration,
    settle_delay: Duration,
}

impl LookupPlan {
    pub fn new(
        adapters: Vec<Arc<dyn SourceAdapter>>,
        chained: bool,
        gate: Option<GatePredicate>,
        secondary_timeout: Duration,
    ) -> Result<Self> {
        let mut adapters = adapters.into_iter();
        let (primary, secondary) = match (adapters.next(), adapters.next(), adapters.next()) {
            (Some(primary), secondary, None) => (primary, secondary),
            _ => {
                return Err(GlossError::Config(
                    "a lookup plan needs one or two sources".to_string(),
                ))
            }
        };

        let strategy = match (&secondary, chained) {
            (None, true) => {
                return Err(GlossError::Config(
                    "chained lookups need two sources".to_string(),
                ))
            }
            (None, false) => Strategy::Single,
            (Some(_), true) => Strategy::Chained,
            (Some(_), false) => Strategy::Parallel,
        };

        Ok(Self {
            primary,
            secondary,
            strategy,
            gate,
            secondary_timeout,
            settle_delay: Duration::from_millis(TOOLTIP_SETTLE_MS),
        })
    }

    /// Build adapters for every configured source
    pub fn from_config(config: &LookupConfig, client: &HttpClient) -> Result<Self> {
        config.validate()?;

        let adapters = config
            .sources
            .iter()
            .map(|kind| build_adapter(*kind, config, client.clone()))
            .collect::<Result<Vec<_>>>()?;

        let gate = config
            .domain_gate
            .as_ref()
            .map(|gate| gate.compile())
            .transpose()?;

        Self::new(adapters, config.chained, gate, config.secondary_timeout())
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn adapter(&self, source: SourceId) -> Option<&Arc<dyn SourceAdapter>> {
        match source {
            SourceId::Primary => Some(&self.primary),
            SourceId::Secondary => self.secondary.as_ref(),
        }
    }

    /// Whether `query` may be sent to the primary source
    pub fn primary_permits(&self, query: &str) -> bool {
        self.gate.as_ref().map_or(true, |gate| gate.permits(query))
    }

    /// Only the secondary source gets a race timeout
    pub fn race_limit(&self, source: SourceId) -> Option<Duration> {
        match source {
            SourceId::Primary => None,
            SourceId::Secondary => Some(self.secondary_timeout),
        }
    }
}
