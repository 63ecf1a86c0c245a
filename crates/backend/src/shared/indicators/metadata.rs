use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn total_sales() -> IndicatorId {
        IndicatorId::new("total_sales")
    }
    pub fn avg_production_time() -> IndicatorId {
        IndicatorId::new("avg_production_time")
    }
    pub fn avg_cost_per_unit() -> IndicatorId {
        IndicatorId::new("avg_cost_per_unit")
    }
    pub fn avg_customer_satisfaction() -> IndicatorId {
        IndicatorId::new("avg_customer_satisfaction")
    }
    pub fn avg_product_rating() -> IndicatorId {
        IndicatorId::new("avg_product_rating")
    }
}

/// Chart IDs, named after the report table each chart plots.
pub mod charts {
    pub const SALES_BY_CHANNEL: &str = "sales_by_channel";
    pub const PRODUCTION_TIME_BY_PRODUCT_TYPE: &str = "production_time_by_product_type";
    pub const COST_PER_UNIT_BY_PRODUCT_TYPE: &str = "cost_per_unit_by_product_type";
    pub const DAILY_REVENUE: &str = "daily_revenue";
    pub const DAILY_PRODUCTION_TIME: &str = "daily_production_time";
    pub const DAILY_COST_PER_UNIT: &str = "daily_cost_per_unit";
    pub const DAILY_CUSTOMER_SATISFACTION: &str = "daily_customer_satisfaction";
    pub const DAILY_PRODUCT_RATING: &str = "daily_product_rating";
}

fn money() -> ValueFormat {
    ValueFormat::Money {
        currency: "$".into(),
    }
}

fn score() -> ValueFormat {
    ValueFormat::Score {
        decimals: 2,
        scale: 5,
    }
}

/// Shared caption of the daily trend charts.
const DAILY_TRENDS_CAPTION: &str =
    "Estos gráficos muestran las tendencias diarias de varios KPI's importantes para tu tienda de poleras personalizadas.";

fn chart(
    id: &str,
    kind: ChartKind,
    title: &str,
    x_label: &str,
    y_label: &str,
    description: Option<&str>,
) -> ChartMeta {
    ChartMeta {
        id: id.into(),
        kind,
        title: title.into(),
        x_label: x_label.into(),
        y_label: y_label.into(),
        description: description.map(Into::into),
    }
}

/// Build the full catalogue of indicators, charts and sets.
pub fn build_catalog() -> IndicatorCatalogResponse {
    let indicators = vec![
        IndicatorMeta {
            id: ids::total_sales(),
            label: "Ventas Totales".into(),
            short_label: Some("Ventas".into()),
            format: money(),
            description: Some("Suma de Revenue de los registros filtrados".into()),
        },
        IndicatorMeta {
            id: ids::avg_production_time(),
            label: "Tiempo de Producción Promedio".into(),
            short_label: Some("Producción".into()),
            format: ValueFormat::Number {
                decimals: 2,
                unit: Some("horas".into()),
            },
            description: None,
        },
        IndicatorMeta {
            id: ids::avg_cost_per_unit(),
            label: "Costo por Unidad Promedio".into(),
            short_label: Some("Costo".into()),
            format: money(),
            description: None,
        },
        IndicatorMeta {
            id: ids::avg_customer_satisfaction(),
            label: "Índice de Satisfacción del Cliente".into(),
            short_label: Some("Satisfacción".into()),
            format: score(),
            description: None,
        },
        IndicatorMeta {
            id: ids::avg_product_rating(),
            label: "Calificación Promedio de los Productos".into(),
            short_label: Some("Calificación".into()),
            format: score(),
            description: None,
        },
    ];

    let charts = vec![
        chart(
            charts::SALES_BY_CHANNEL,
            ChartKind::Bar,
            "Ventas por Canal de Venta",
            "Canal de Venta",
            "Revenue",
            Some("Compara el rendimiento de la tienda en línea, redes sociales, ferias, etc."),
        ),
        chart(
            charts::PRODUCTION_TIME_BY_PRODUCT_TYPE,
            ChartKind::Bar,
            "Tiempo de Producción Promedio por Tipo de Producto",
            "Tipo de Producto",
            "Tiempo de Producción (horas)",
            Some("Tiempo promedio que tarda en producirse cada tipo de producto."),
        ),
        chart(
            charts::COST_PER_UNIT_BY_PRODUCT_TYPE,
            ChartKind::Bar,
            "Costo por Unidad Promedio por Tipo de Producto",
            "Tipo de Producto",
            "Costo por Unidad ($)",
            Some("Costo promedio por unidad para cada tipo de producto."),
        ),
        chart(
            charts::DAILY_REVENUE,
            ChartKind::DailyBar,
            "Ventas Totales por Día",
            "",
            "Revenue",
            Some(DAILY_TRENDS_CAPTION),
        ),
        chart(
            charts::DAILY_PRODUCTION_TIME,
            ChartKind::DailyBar,
            "Producción por Día",
            "",
            "Production Time (horas)",
            Some(DAILY_TRENDS_CAPTION),
        ),
        chart(
            charts::DAILY_COST_PER_UNIT,
            ChartKind::DailyBar,
            "Costo por Unidad por Día",
            "",
            "Cost per Unit",
            Some(DAILY_TRENDS_CAPTION),
        ),
        chart(
            charts::DAILY_CUSTOMER_SATISFACTION,
            ChartKind::DailyBar,
            "Satisfacción del Cliente por Día",
            "",
            "Customer Satisfaction",
            Some(DAILY_TRENDS_CAPTION),
        ),
        chart(
            charts::DAILY_PRODUCT_RATING,
            ChartKind::DailyBar,
            "Calificación del Producto por Día",
            "",
            "Product Rating",
            Some(DAILY_TRENDS_CAPTION),
        ),
    ];

    let sets = vec![IndicatorSetMeta {
        id: IndicatorSetId::new("sales_kpis"),
        label: "KPI's Clave".into(),
        indicators: vec![
            ids::total_sales(),
            ids::avg_production_time(),
            ids::avg_cost_per_unit(),
            ids::avg_customer_satisfaction(),
            ids::avg_product_rating(),
        ],
        columns: 3,
    }];

    IndicatorCatalogResponse {
        title: "Dashboard de Ventas de Poleras Personalizadas".into(),
        subtitle: "Monitorización de KPI's Clave".into(),
        indicators,
        charts,
        sets,
    }
}
