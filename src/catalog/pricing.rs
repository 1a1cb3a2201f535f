#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
    pub tooltip: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub billing_period: &'static str,
    pub features: &'static [PlanFeature],
    pub highlighted: bool,
    pub badge: Option<&'static str>,
    pub button_text: &'static str,
}

const fn yes(text: &'static str) -> PlanFeature {
    PlanFeature {
        text,
        included: true,
        tooltip: None,
    }
}

const fn no(text: &'static str) -> PlanFeature {
    PlanFeature {
        text,
        included: false,
        tooltip: None,
    }
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        description: "Perfect for individual architects and small projects",
        price: "$99",
        billing_period: "one-time payment",
        features: &[
            yes("Basic CAD to Revit conversion"),
            yes("Single user license"),
            yes("Standard support"),
            yes("1 year of updates"),
            yes("Basic mapping rules"),
            PlanFeature {
                text: "Batch processing (up to 5 files)",
                included: false,
                tooltip: Some("Limited to 5 files per batch"),
            },
            no("Advanced property mapping"),
            no("Custom mapping rules"),
            no("Priority support"),
        ],
        highlighted: false,
        badge: None,
        button_text: "Buy Now",
    },
    PricingTier {
        name: "Professional",
        description: "Ideal for professional architects and design firms",
        price: "$249",
        billing_period: "one-time payment",
        features: &[
            yes("Advanced CAD to Revit conversion"),
            yes("Up to 5 user licenses"),
            yes("Priority support"),
            yes("2 years of updates"),
            yes("Advanced mapping rules"),
            yes("Batch processing (unlimited)"),
            yes("Advanced property mapping"),
            yes("Custom mapping rules"),
            no("API access"),
        ],
        highlighted: true,
        badge: Some("Most Popular"),
        button_text: "Buy Now",
    },
    PricingTier {
        name: "Enterprise",
        description: "For large organizations with complex requirements",
        price: "$599",
        billing_period: "one-time payment",
        features: &[
            yes("Premium CAD to Revit conversion"),
            yes("Unlimited user licenses"),
            yes("24/7 priority support"),
            yes("Lifetime updates"),
            yes("Custom mapping rules"),
            yes("Batch processing (unlimited)"),
            yes("Advanced property mapping"),
            yes("API access"),
        ],
        highlighted: false,
        badge: None,
        button_text: "Contact Sales",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_highlighted_tier() {
        let highlighted: Vec<_> = PRICING_TIERS.iter().filter(|t| t.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].badge, Some("Most Popular"));
    }

    #[test]
    fn test_enterprise_includes_everything() {
        let enterprise = PRICING_TIERS.last().unwrap();
        assert!(enterprise.features.iter().all(|f| f.included));
    }
}
