/// Release metadata shown in the download card and across the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub version: &'static str,
    pub release_date: &'static str,
    pub file_size_mb: f64,
    pub compatibility: &'static str,
    pub license: &'static str,
    pub updates: &'static str,
    pub support_email: &'static str,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
    pub contact_address: &'static str,
}

pub const PRODUCT: ProductInfo = ProductInfo {
    name: "RevitCAD Converter",
    tagline: "Professional CAD to Revit conversion plugin with powerful features to streamline your workflow.",
    version: "2.4.1",
    release_date: "June 15, 2023",
    file_size_mb: 42.8,
    compatibility: "Revit 2021-2024",
    license: "Commercial",
    updates: "Automatic",
    support_email: "support@revitcadconverter.com",
    contact_email: "contact@revitcadconverter.com",
    contact_phone: "+1 (555) 123-4567",
    contact_address: "123 Tech Plaza, Suite 400, San Francisco, CA 94103",
};

impl ProductInfo {
    pub fn file_size_label(&self) -> String {
        format!("{:.1} MB", self.file_size_mb)
    }

    pub fn support_mailto(&self) -> String {
        format!("mailto:{}", self.support_email)
    }

    pub fn contact_mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    pub fn contact_tel(&self) -> String {
        let digits: String = self
            .contact_phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    /// Whole megabytes transferred at `progress` percent, counted against the
    /// integer part of the file size.
    pub fn transferred_mb(&self, progress: u8) -> u32 {
        let whole_mb = self.file_size_mb.trunc();
        (whole_mb * f64::from(progress.min(100)) / 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transferred_mb_rounds_to_whole_megabytes() {
        assert_eq!(PRODUCT.transferred_mb(0), 0);
        assert_eq!(PRODUCT.transferred_mb(5), 2);
        assert_eq!(PRODUCT.transferred_mb(50), 21);
        assert_eq!(PRODUCT.transferred_mb(55), 23);
        assert_eq!(PRODUCT.transferred_mb(100), 42);
        assert_eq!(PRODUCT.transferred_mb(250), 42);
    }

    #[test]
    fn test_contact_tel_strips_formatting() {
        assert_eq!(PRODUCT.contact_tel(), "tel:+15551234567");
    }
}
