#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Geometry,
    Mapping,
    Updates,
    Performance,
    Batch,
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
    pub demo_url: &'static str,
    pub demo_thumbnail: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Intelligent Geometry Conversion",
        description: "Automatically convert CAD lines, arcs, and polylines to native Revit elements with precise geometry preservation.",
        icon: FeatureIcon::Geometry,
        demo_url: "https://images.unsplash.com/photo-1581291518633-83b4ebd1d83e?w=800&q=80",
        demo_thumbnail: "https://images.unsplash.com/photo-1581291518633-83b4ebd1d83e?w=400&q=60",
    },
    Feature {
        title: "Smart Property Mapping",
        description: "Transfer CAD layer properties to Revit parameters automatically with our intelligent mapping system.",
        icon: FeatureIcon::Mapping,
        demo_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&q=80",
        demo_thumbnail: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400&q=60",
    },
    Feature {
        title: "Automatic Updates",
        description: "Keep your plugin up-to-date with our seamless update system that ensures you always have the latest features.",
        icon: FeatureIcon::Updates,
        demo_url: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=800&q=80",
        demo_thumbnail: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=400&q=60",
    },
    Feature {
        title: "High-Performance Processing",
        description: "Convert even the most complex CAD files quickly with our optimized processing engine that leverages multi-threading.",
        icon: FeatureIcon::Performance,
        demo_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        demo_thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&q=60",
    },
    Feature {
        title: "Batch Conversion",
        description: "Process multiple CAD files at once with our powerful batch conversion tool, saving hours of manual work.",
        icon: FeatureIcon::Batch,
        demo_url: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=800&q=80",
        demo_thumbnail: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=400&q=60",
    },
    Feature {
        title: "Custom Mapping Rules",
        description: "Create your own mapping rules to match your specific workflow and standards for consistent results.",
        icon: FeatureIcon::Rules,
        demo_url: "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=800&q=80",
        demo_thumbnail: "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=400&q=60",
    },
];
