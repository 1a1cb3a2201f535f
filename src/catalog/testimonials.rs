#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub content: &'static str,
}

impl Testimonial {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex Johnson",
        role: "BIM Manager",
        company: "ArchTech Solutions",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=alex",
        content: "This plugin has revolutionized our CAD-to-Revit workflow. We've reduced conversion time by 75% and eliminated most manual corrections. The auto-update feature ensures we're always working with the latest capabilities.",
    },
    Testimonial {
        name: "Sarah Chen",
        role: "Senior Architect",
        company: "Global Design Partners",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=sarah",
        content: "After trying multiple conversion tools, this is the only one that accurately preserves our complex CAD geometries. The installation process was seamless, and the documentation is comprehensive and easy to follow.",
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "IT Director",
        company: "Rodriguez Engineering",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=michael",
        content: "From an IT perspective, this plugin is a dream to deploy. The auto-update functionality works flawlessly across our organization, and the system requirement checker saved us countless support tickets.",
    },
    Testimonial {
        name: "Emily Taylor",
        role: "Project Coordinator",
        company: "Innovative Builders",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=emily",
        content: "Our team of 50+ designers now relies on this plugin daily. The time savings are substantial, and the accuracy of the conversions has improved our client deliverables significantly.",
    },
];
