//! Per-class generation configuration from the `GoModel` annotation.

use type2go_ast::{ClassDecl, Literal};

use crate::error::{Error, Result};

const ANNOTATION: &str = "GoModel";

/// Configuration resolved once per top-level class.
///
/// Defaults apply when the annotation or a property is absent: package
/// `model`, model name = the class identifier, `generateTags = ["json"]`.
/// `generate_tags` is never empty after defaulting; an explicitly empty
/// list is treated like an absent one. Anonymous inline structs never get
/// a `ModelConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub package_name: String,
    pub model_name: String,
    pub generate_tags: Vec<String>,
}

impl ModelConfig {
    /// Resolve the configuration for a class from its `GoModel` annotation.
    pub fn resolve(class: &ClassDecl) -> Result<Self> {
        let target = format!("class '{}'", class.name);

        let args = match class.annotations.get(ANNOTATION) {
            None => None,
            Some(literal) => Some(literal.as_mapping().ok_or_else(|| {
                Error::invalid_annotation(ANNOTATION, &target, "an object literal argument")
            })?),
        };

        let property = |key: &str| args.and_then(|mapping| mapping.get(key));

        let package_name = match property("packageName") {
            None => "model".to_string(),
            Some(Literal::String(name)) => name.clone(),
            Some(_) => {
                return Err(Error::invalid_annotation(
                    ANNOTATION,
                    &target,
                    "a string for `packageName`",
                ));
            }
        };

        let model_name = match property("modelName") {
            None => class.name.clone(),
            Some(Literal::String(name)) => name.clone(),
            Some(_) => {
                return Err(Error::invalid_annotation(
                    ANNOTATION,
                    &target,
                    "a string for `modelName`",
                ));
            }
        };

        let mut generate_tags = match property("generateTags") {
            None => Vec::new(),
            Some(Literal::Sequence(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        Error::invalid_annotation(
                            ANNOTATION,
                            &target,
                            "an array of strings for `generateTags`",
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => {
                return Err(Error::invalid_annotation(
                    ANNOTATION,
                    &target,
                    "an array of strings for `generateTags`",
                ));
            }
        };
        if generate_tags.is_empty() {
            generate_tags = vec!["json".to_string()];
        }

        Ok(Self {
            package_name,
            model_name,
            generate_tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use type2go_ast::Annotations;

    use super::*;

    fn class_with(argument: Option<Literal>) -> ClassDecl {
        let mut annotations = Annotations::new();
        if let Some(argument) = argument {
            annotations.insert("GoModel", argument);
        }
        ClassDecl {
            name: "User".to_string(),
            base: None,
            annotations,
            fields: Vec::new(),
        }
    }

    #[test]
    fn test_defaults_without_annotation_arguments() {
        let config = ModelConfig::resolve(&class_with(Some(Literal::empty_mapping()))).unwrap();
        assert_eq!(config.package_name, "model");
        assert_eq!(config.model_name, "User");
        assert_eq!(config.generate_tags, vec!["json"]);
    }

    #[test]
    fn test_explicit_configuration() {
        let argument = Literal::Mapping(IndexMap::from([
            (
                "packageName".to_string(),
                Literal::String("entities".to_string()),
            ),
            (
                "modelName".to_string(),
                Literal::String("UserModel".to_string()),
            ),
            (
                "generateTags".to_string(),
                Literal::Sequence(vec![
                    Literal::String("json".to_string()),
                    Literal::String("gorm".to_string()),
                ]),
            ),
        ]));

        let config = ModelConfig::resolve(&class_with(Some(argument))).unwrap();
        assert_eq!(config.package_name, "entities");
        assert_eq!(config.model_name, "UserModel");
        assert_eq!(config.generate_tags, vec!["json", "gorm"]);
    }

    #[test]
    fn test_empty_generate_tags_defaults_to_json() {
        let argument = Literal::Mapping(IndexMap::from([(
            "generateTags".to_string(),
            Literal::Sequence(vec![]),
        )]));

        let config = ModelConfig::resolve(&class_with(Some(argument))).unwrap();
        assert_eq!(config.generate_tags, vec!["json"]);
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let argument = Literal::Mapping(IndexMap::from([(
            "generateTags".to_string(),
            Literal::String("json".to_string()),
        )]));

        let err = ModelConfig::resolve(&class_with(Some(argument))).unwrap_err();
        assert!(matches!(err, Error::InvalidAnnotation { .. }));
    }
}
