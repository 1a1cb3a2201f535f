#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementStatus {
    Pass,
    Warning,
    Fail,
}

impl RequirementStatus {
    pub fn tooltip(self) -> &'static str {
        match self {
            Self::Pass => "Meets requirements",
            Self::Warning => "Meets minimum requirements",
            Self::Fail => "Does not meet requirements",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemRequirement {
    pub name: &'static str,
    pub required: &'static str,
    pub recommended: &'static str,
    pub status: RequirementStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstallationStep {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SYSTEM_REQUIREMENTS: &[SystemRequirement] = &[
    SystemRequirement {
        name: "Operating System",
        required: "Windows 10 (64-bit)",
        recommended: "Windows 11 (64-bit)",
        status: RequirementStatus::Pass,
    },
    SystemRequirement {
        name: "Revit Version",
        required: "Revit 2021+",
        recommended: "Revit 2023+",
        status: RequirementStatus::Pass,
    },
    SystemRequirement {
        name: "RAM",
        required: "8 GB",
        recommended: "16 GB",
        status: RequirementStatus::Warning,
    },
    SystemRequirement {
        name: ".NET Framework",
        required: "4.8",
        recommended: "4.8+",
        status: RequirementStatus::Pass,
    },
    SystemRequirement {
        name: "Disk Space",
        required: "200 MB",
        recommended: "500 MB",
        status: RequirementStatus::Pass,
    },
];

pub const INSTALLATION_STEPS: &[InstallationStep] = &[
    InstallationStep {
        title: "Download the installer",
        description: "Click the download button to get the latest version of our Revit plugin.",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=600&q=80",
    },
    InstallationStep {
        title: "Close Revit",
        description: "Ensure all Revit instances are closed before proceeding with installation.",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=600&q=80",
    },
    InstallationStep {
        title: "Run the installer",
        description: "Double-click the downloaded file and follow the on-screen instructions.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&q=80",
    },
    InstallationStep {
        title: "Launch Revit",
        description: "Open Revit and verify the plugin appears in the Add-Ins tab.",
        image: "https://images.unsplash.com/photo-1581291518633-83b4ebd1d83e?w=600&q=80",
    },
];
