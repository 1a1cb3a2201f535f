#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub ty: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiMethod {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
    pub parameters: &'static [Parameter],
    pub returns: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiClass {
    pub title: &'static str,
    pub description: &'static str,
    pub methods: &'static [ApiMethod],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tutorial {
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const API_DOCS: &[ApiClass] = &[
    ApiClass {
        title: "CADConverter Class",
        description: "The main class for converting CAD files to Revit elements.",
        methods: &[
            ApiMethod {
                name: "Convert",
                signature: "Result Convert(string filePath)",
                description: "Converts a CAD file to Revit elements.",
                parameters: &[Parameter {
                    name: "filePath",
                    ty: "string",
                    description: "Path to the CAD file.",
                }],
                returns: "Result object containing conversion information.",
            },
            ApiMethod {
                name: "BatchConvert",
                signature: "BatchResult BatchConvert(string[] filePaths)",
                description: "Converts multiple CAD files to Revit elements.",
                parameters: &[Parameter {
                    name: "filePaths",
                    ty: "string[]",
                    description: "Array of paths to CAD files.",
                }],
                returns: "BatchResult object containing conversion information for each file.",
            },
            ApiMethod {
                name: "LoadMappingRules",
                signature: "void LoadMappingRules(string jsonFilePath)",
                description: "Loads mapping rules from a JSON file.",
                parameters: &[Parameter {
                    name: "jsonFilePath",
                    ty: "string",
                    description: "Path to the JSON file containing mapping rules.",
                }],
                returns: "void",
            },
        ],
    },
    ApiClass {
        title: "ConversionSettings Class",
        description: "Class for configuring conversion settings.",
        methods: &[
            ApiMethod {
                name: "SetDefaultMappingRules",
                signature: "void SetDefaultMappingRules()",
                description: "Sets default mapping rules for common CAD layers.",
                parameters: &[],
                returns: "void",
            },
            ApiMethod {
                name: "AddMappingRule",
                signature: "void AddMappingRule(string cadLayer, string revitCategory, string revitFamily, string revitType)",
                description: "Adds a new mapping rule for a CAD layer.",
                parameters: &[
                    Parameter {
                        name: "cadLayer",
                        ty: "string",
                        description: "CAD layer name.",
                    },
                    Parameter {
                        name: "revitCategory",
                        ty: "string",
                        description: "Revit category name.",
                    },
                    Parameter {
                        name: "revitFamily",
                        ty: "string",
                        description: "Revit family name.",
                    },
                    Parameter {
                        name: "revitType",
                        ty: "string",
                        description: "Revit type name.",
                    },
                ],
                returns: "void",
            },
        ],
    },
];

pub const TUTORIALS: &[Tutorial] = &[
    Tutorial {
        title: "Getting Started",
        description: "Learn how to install and set up the plugin.",
        steps: &[
            "Download the plugin from the website",
            "Close all Revit instances",
            "Run the installer and follow the instructions",
            "Launch Revit and verify the plugin is installed",
            "Configure your preferences in the plugin settings",
        ],
    },
    Tutorial {
        title: "Basic Conversion",
        description: "Learn how to convert a simple CAD file to Revit elements.",
        steps: &[
            "Open Revit and create a new project",
            "Click on the 'CAD to Revit' button in the Add-Ins tab",
            "Select the CAD file you want to convert",
            "Choose the conversion settings",
            "Click 'Convert' and wait for the process to complete",
            "Review the converted elements in your Revit project",
        ],
    },
    Tutorial {
        title: "Advanced Mapping",
        description: "Learn how to create custom mapping rules for complex projects.",
        steps: &[
            "Open the plugin settings",
            "Navigate to the 'Mapping Rules' tab",
            "Click 'Create New Rule'",
            "Enter the CAD layer name and corresponding Revit category, family, and type",
            "Save the rule and apply it to your conversion",
            "Test the rule with a sample CAD file",
        ],
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What CAD file formats are supported?",
        answer: "Our plugin supports DWG, DXF, and DGN file formats from AutoCAD and MicroStation.",
    },
    Faq {
        question: "Can I convert multiple CAD files at once?",
        answer: "Yes, our plugin supports batch conversion of multiple CAD files. Simply select multiple files in the file picker or use the batch conversion feature.",
    },
    Faq {
        question: "How accurate is the geometry conversion?",
        answer: "Our plugin uses advanced algorithms to ensure highly accurate geometry conversion. In most cases, the converted geometry will be identical to the original CAD geometry.",
    },
    Faq {
        question: "Can I customize how CAD layers are mapped to Revit categories?",
        answer: "Yes, you can create custom mapping rules to define how CAD layers are mapped to Revit categories, families, and types. This gives you full control over the conversion process.",
    },
    Faq {
        question: "Does the plugin work with all versions of Revit?",
        answer: "The plugin is compatible with Revit 2021 and newer versions. We regularly update the plugin to ensure compatibility with the latest Revit releases.",
    },
    Faq {
        question: "Is there a limit to the size of CAD files I can convert?",
        answer: "While there is no hard limit, very large CAD files may require more processing time and memory. We recommend splitting extremely large files into smaller parts for optimal performance.",
    },
];

pub const CSHARP_EXAMPLE: &str = r#"// Initialize the CAD to Revit converter
using RevitCADConverter;

public Result ConvertCADToRevit(string cadFilePath)
{
    // Create a new converter instance
    var converter = new CADConverter();

    // Configure conversion settings
    converter.Settings.PreserveLayerProperties = true;
    converter.Settings.ConvertToFamilies = true;
    converter.Settings.ImportLinework = true;

    // Execute the conversion
    return converter.Convert(cadFilePath);
}"#;

pub const PYTHON_EXAMPLE: &str = r#"# Import the Revit API and CAD converter
import clr
clr.AddReference("RevitAPI")
clr.AddReference("RevitCADConverter")

from RevitCADConverter import CADConverter

# Initialize converter
converter = CADConverter()

# Configure settings
converter.Settings.PreserveLayerProperties = True
converter.Settings.ConvertToFamilies = True
converter.Settings.ImportLinework = True

# Execute conversion
result = converter.Convert(cad_file_path)"#;

pub const JSON_EXAMPLE: &str = r#"{
  "conversionSettings": {
    "preserveLayerProperties": true,
    "convertToFamilies": true,
    "importLinework": true,
    "mappingRules": [
      {
        "cadLayer": "WALL",
        "revitCategory": "Walls",
        "revitFamily": "Basic Wall",
        "revitType": "Generic - 8\""
      },
      {
        "cadLayer": "DOOR",
        "revitCategory": "Doors",
        "revitFamily": "Single-Flush",
        "revitType": "36\" x 84\""
      }
    ]
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_example_is_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(JSON_EXAMPLE).unwrap();
        let rules = &parsed["conversionSettings"]["mappingRules"];
        assert_eq!(rules.as_array().map(Vec::len), Some(2));
        assert_eq!(rules[0]["revitType"], "Generic - 8\"");
    }
}
