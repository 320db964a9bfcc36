use url::form_urlencoded;

/// Paths exposed by the analytics service.
pub mod paths {
    pub const METRICS_KPIS: &str = "/metrics/kpis";
    pub const TOP_RESTAURANTS: &str = "/metrics/top-restaurants";
    pub const BY_CITY: &str = "/metrics/by-city";
    pub const PRICE_BY_CITY: &str = "/analytics/price-by-city";
    pub const AGE_HISTOGRAM: &str = "/analytics/age-histogram";
    pub const DRINK_LEVELS_BY_CITY: &str = "/analytics/drink-levels-by-city";
    pub const BUDGET_BY_OCCUPATION: &str = "/analytics/budget-by-occupation";
    pub const CUISINE_SHARE: &str = "/analytics/cuisine-share";
    pub const ALCOHOL_SERVICE: &str = "/analytics/alcohol-service";
    pub const RATINGS_BY_RESTAURANT: &str = "/analytics/ratings-by-restaurant";
    pub const AVG_VS_COUNT: &str = "/analytics/avg-vs-count";
    pub const BUDGET_BY_AGE: &str = "/analytics/budget-by-age";
    pub const DRINK_SATISFACTION: &str = "/analytics/drink-satisfaction";
    pub const PRICE_COUNT_STACKED: &str = "/analytics/price-count-stacked";
    pub const TOP_CUISINES: &str = "/analytics/top-cuisines";
    pub const FRANCHISE_COUNT: &str = "/analytics/franchise-count";
    pub const TOP_CUISINES_BY_PRICE_100: &str = "/analytics/top-cuisines-by-price-100";
    pub const CONSUMERS_OCCUPATION_BUDGET: &str = "/analytics/consumers-occupation-budget";
    pub const RATINGS_COUNT_TOP10: &str = "/analytics/ratings-count-top10";
    pub const RATINGS_QUAL_BY_NAME: &str = "/analytics/ratings-qual-by-name";
    pub const PREF_CUISINE_TOP10: &str = "/analytics/pref-cuisine-top10";
    pub const CONSUMERS_AGE_BINS: &str = "/analytics/consumers-age-bins";
    pub const KPI_AVERAGE_AGE: &str = "/kpi/average-age";
    pub const KPI_AVERAGE_BUDGET_SCORE: &str = "/kpi/average-budget-score";
    pub const KPI_ABSTEMIOUS_RATE: &str = "/kpi/abstemious-rate";
    pub const KPI_AVG_RATING: &str = "/kpi/avg-rating";
    pub const KPI_LOYALTY_RATE: &str = "/kpi/loyalty-rate";
    pub const KPI_RESTAURANT_DENSITY: &str = "/kpi/restaurant-density";
    pub const INVESTOR_KPIS: &str = "/investor/kpis";
    pub const PREDICTIVE_SUMMARY: &str = "/predictive/summary";
}

/// A read-only GET against the analytics service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            query: Vec::new(),
        }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Adds `key=value` only when a value is given.
    pub fn opt_param(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Path plus encoded query string, relative to the API base.
    pub fn relative(&self) -> String {
        if self.query.is_empty() {
            return self.path.to_string();
        }
        let mut qs = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.query {
            qs.append_pair(k, v);
        }
        format!("{}?{}", self.path, qs.finish())
    }

    /// Absolute URL under `base` (trailing slashes on `base` are ignored).
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.relative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_encodes_query() {
        let ep = Endpoint::new(paths::INVESTOR_KPIS).param("city", "San Luis Potosi");
        assert_eq!(
            ep.url("http://127.0.0.1:8000/"),
            "http://127.0.0.1:8000/investor/kpis?city=San+Luis+Potosi"
        );
    }

    #[test]
    fn relative_without_query_is_plain_path() {
        assert_eq!(Endpoint::new(paths::BY_CITY).relative(), "/metrics/by-city");
        assert_eq!(
            Endpoint::new(paths::TOP_RESTAURANTS).param("n", 10).relative(),
            "/metrics/top-restaurants?n=10"
        );
    }

    #[test]
    fn opt_param_skips_none() {
        let ep = Endpoint::new(paths::TOP_CUISINES).opt_param("city", None);
        assert!(ep.query.is_empty());
        let ep = Endpoint::new(paths::TOP_CUISINES).opt_param("city", Some("Ciudad Victoria"));
        assert_eq!(ep.query, vec![("city", "Ciudad Victoria".to_string())]);
    }
}
