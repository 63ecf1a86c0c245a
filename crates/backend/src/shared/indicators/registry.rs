use contracts::dashboards::d402_sales_overview::{KpiCard, SalesKpis};
use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::metadata::ids;
use crate::shared::format::format_value;

type ValueFn = fn(&SalesKpis) -> Option<f64>;

/// Central registry: maps `IndicatorId` to the KPI field it reads.
pub struct IndicatorRegistry {
    fns: HashMap<String, ValueFn>,
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        let mut fns: HashMap<String, ValueFn> = HashMap::new();

        fns.insert(ids::total_sales().0, |k| Some(k.total_sales));
        fns.insert(ids::avg_production_time().0, |k| k.avg_production_time);
        fns.insert(ids::avg_cost_per_unit().0, |k| k.avg_cost_per_unit);
        fns.insert(ids::avg_customer_satisfaction().0, |k| {
            k.avg_customer_satisfaction
        });
        fns.insert(ids::avg_product_rating().0, |k| k.avg_product_rating);

        Self { fns }
    }

    #[cfg(test)]
    fn value(&self, id: &IndicatorId, kpis: &SalesKpis) -> Option<f64> {
        self.fns.get(&id.0).and_then(|f| f(kpis))
    }

    /// Build display cards for every catalogued indicator, in catalogue order.
    pub fn cards(&self, kpis: &SalesKpis, catalog: &IndicatorCatalogResponse) -> Vec<KpiCard> {
        let mut cards = Vec::with_capacity(catalog.indicators.len());

        for meta in &catalog.indicators {
            let Some(value_fn) = self.fns.get(&meta.id.0) else {
                tracing::warn!("indicator {} not found in registry", meta.id.0);
                continue;
            };
            let value = value_fn(kpis);
            cards.push(KpiCard {
                id: meta.id.clone(),
                label: meta.label.clone(),
                value,
                display: format_value(value, &meta.format),
            });
        }

        cards
    }
}
