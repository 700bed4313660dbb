use crate::datatype::{DataType, LangStringDataType, StringDataType};
use crate::error::{DatatypeMismatchError, LiteralError};
use crate::language_tag::LanguageTag;
use crate::named_node::{NamedNode, NamedNodeRef};
use crate::vocab::{rdf, xsd};
use oxilangtag::LanguageTagParseError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt::{self, Write};

/// An owned RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// A literal is a lexical form with a [`DataType`] and, for language-tagged strings, a [`LanguageTag`].
/// Two literals are equal if and only if their lexical forms, datatype IRIs and language tags are equal.
///
/// The default string formatter is returning an N-Triples, Turtle, and SPARQL compatible representation:
/// ```
/// # use oxterm::LanguageTagParseError;
/// use oxterm::Literal;
/// use oxterm::vocab::xsd;
///
/// assert_eq!(
///     "\"foo\\nbar\"",
///     Literal::new_simple_literal("foo\nbar").to_string()
/// );
///
/// assert_eq!(
///     r#""1999-01-01"^^<http://www.w3.org/2001/XMLSchema#date>"#,
///     Literal::new_typed_literal("1999-01-01", xsd::DATE).to_string()
/// );
///
/// assert_eq!(
///     r#""foo"@en"#,
///     Literal::new_language_tagged_literal("foo", "en")?.to_string()
/// );
/// # Result::<(), LanguageTagParseError>::Ok(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Literal {
    value: String,
    datatype: DataType,
    language: Option<LanguageTag>,
}

impl Literal {
    /// Builds a literal from its components, checking that they are consistent.
    ///
    /// A missing datatype defaults to `rdf:langString` if a language tag is given and to `xsd:string` otherwise.
    /// ```
    /// use oxterm::vocab::{rdf, xsd};
    /// use oxterm::{LanguageTag, Literal};
    ///
    /// let tagged = Literal::new("chat", None, Some(LanguageTag::new("fr")?))?;
    /// assert_eq!(tagged.datatype_iri()?, rdf::LANG_STRING);
    ///
    /// assert!(Literal::new("chat", Some(xsd::STRING.into()), Some(LanguageTag::new("fr")?)).is_err());
    /// assert!(Literal::new("chat", Some(rdf::LANG_STRING.into()), None).is_err());
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn new(
        value: impl Into<String>,
        datatype: Option<NamedNode>,
        language: Option<LanguageTag>,
    ) -> Result<Self, LiteralError> {
        let value = value.into();
        match (datatype, language) {
            (None, None) => Ok(Self::new_simple_literal(value)),
            (Some(datatype), None) => {
                if datatype == rdf::LANG_STRING {
                    Err(LiteralError::MissingLanguage)
                } else {
                    Ok(Self::new_typed_literal(value, datatype))
                }
            }
            (None, Some(language)) => Ok(Self::from_language_tag(value, language)),
            (Some(datatype), Some(language)) => {
                if datatype == rdf::LANG_STRING {
                    Ok(Self::from_language_tag(value, language))
                } else {
                    Err(LiteralError::LanguageWithDatatype(datatype))
                }
            }
        }
    }

    /// Builds an RDF [simple literal](https://www.w3.org/TR/rdf11-concepts/#dfn-simple-literal).
    #[inline]
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: StringDataType::new().into(),
            language: None,
        }
    }

    /// Builds an RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal) with a [datatype](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri).
    ///
    /// `rdf:langString` is not rejected here, [`Literal::new`] should be used for untrusted data.
    #[inline]
    pub fn new_typed_literal(value: impl Into<String>, datatype: impl Into<NamedNode>) -> Self {
        Self {
            value: value.into(),
            datatype: DataType::new(datatype),
            language: None,
        }
    }

    /// Builds an RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
    ///
    /// The tag is validated but its case is kept as given.
    #[inline]
    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, LanguageTagParseError> {
        Ok(Self::from_language_tag(value, LanguageTag::new(language)?))
    }

    /// Builds an RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
    ///
    /// It is the responsibility of the caller to check that `language`
    /// is valid [BCP47](https://tools.ietf.org/html/bcp47) language tag.
    ///
    /// [`Literal::new_language_tagged_literal()`] is a safe version of this constructor and should be used for untrusted data.
    #[inline]
    pub fn new_language_tagged_literal_unchecked(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self::from_language_tag(value, LanguageTag::new_unchecked(language))
    }

    #[inline]
    fn from_language_tag(value: impl Into<String>, language: LanguageTag) -> Self {
        Self {
            value: value.into(),
            datatype: LangStringDataType::new().into(),
            language: Some(language),
        }
    }

    /// The literal [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
    #[inline]
    pub fn lexical_form(&self) -> &str {
        &self.value
    }

    /// The literal [datatype](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri).
    #[inline]
    pub fn datatype(&self) -> &DataType {
        &self.datatype
    }

    /// Shortcut for `self.datatype().iri()`.
    #[inline]
    pub fn datatype_iri(&self) -> Result<NamedNodeRef<'_>, DatatypeMismatchError> {
        self.datatype.iri()
    }

    /// The literal [language tag](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tag) if it is a [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
    #[inline]
    pub fn language(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }

    /// Checks if this literal could be seen as an RDF 1.0 [plain literal](https://www.w3.org/TR/2004/REC-rdf-concepts-20040210/#dfn-plain-literal).
    ///
    /// It returns true if the literal is a [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)
    /// or has the datatype [xsd:string](https://www.w3.org/TR/xmlschema11-2/#string).
    #[inline]
    pub fn is_plain(&self) -> bool {
        self.language.is_some() || self.datatype.stored_iri() == xsd::STRING
    }

    /// Same as `==` but compares the language tags ignoring ASCII case.
    pub fn eq_ignore_language_case(&self, other: &Self) -> bool {
        self.value == other.value
            && self.datatype == other.datatype
            && match (&self.language, &other.language) {
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                (None, None) => true,
                _ => false,
            }
    }

    /// Extract components from this literal (value, datatype and language tag).
    #[inline]
    pub fn destruct(self) -> (String, DataType, Option<LanguageTag>) {
        (self.value, self.datatype, self.language)
    }

    /// The canonical N-Triples form of this literal.
    ///
    /// The `^^xsd:string` suffix is omitted and `@language` is used for language-tagged strings.
    #[inline]
    pub fn ntriples_string(&self) -> String {
        self.to_string()
    }

    fn typed(value: String, datatype: NamedNodeRef<'static>) -> Self {
        Self {
            value,
            datatype: DataType::new(datatype),
            language: None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_quoted_str(&self.value, f)?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else {
            let datatype = self.datatype.stored_iri();
            if datatype == xsd::STRING {
                Ok(())
            } else {
                write!(f, "^^{datatype}")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Literal {
    /// Goes through [`Literal::new`] so a language tag always comes with `rdf:langString`.
    ///
    /// The deserialized [`DataType`] variant is kept as is:
    /// a fixed-IRI wrapper holding another IRI is reported when its IRI is read.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Literal")]
        struct Value {
            value: String,
            datatype: DataType,
            language: Option<LanguageTag>,
        }
        let Value {
            value,
            datatype,
            language,
        } = Value::deserialize(deserializer)?;
        let literal = Self::new(value, Some(datatype.stored_iri().into_owned()), language)
            .map_err(de::Error::custom)?;
        Ok(Self { datatype, ..literal })
    }
}

impl From<&str> for Literal {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new_simple_literal(value)
    }
}

impl From<String> for Literal {
    #[inline]
    fn from(value: String) -> Self {
        Self::new_simple_literal(value)
    }
}

impl From<bool> for Literal {
    #[inline]
    fn from(value: bool) -> Self {
        Self::typed(value.to_string(), xsd::BOOLEAN)
    }
}

impl From<i32> for Literal {
    #[inline]
    fn from(value: i32) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }
}

impl From<i64> for Literal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }
}

impl From<u32> for Literal {
    #[inline]
    fn from(value: u32) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }
}

impl From<u64> for Literal {
    #[inline]
    fn from(value: u64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }
}

impl From<f32> for Literal {
    #[inline]
    fn from(value: f32) -> Self {
        Self::typed(
            if value == f32::INFINITY {
                "INF".to_owned()
            } else if value == f32::NEG_INFINITY {
                "-INF".to_owned()
            } else {
                value.to_string()
            },
            xsd::FLOAT,
        )
    }
}

impl From<f64> for Literal {
    #[inline]
    fn from(value: f64) -> Self {
        Self::typed(
            if value == f64::INFINITY {
                "INF".to_owned()
            } else if value == f64::NEG_INFINITY {
                "-INF".to_owned()
            } else {
                value.to_string()
            },
            xsd::DOUBLE,
        )
    }
}

/// Writes `string` as a quoted N-Triples string, escaping what the canonical form requires.
#[inline]
pub(crate) fn print_quoted_str(string: &str, f: &mut impl Write) -> fmt::Result {
    f.write_char('"')?;
    for c in string.chars() {
        match c {
            '\u{08}' => f.write_str("\\b"),
            '\t' => f.write_str("\\t"),
            '\n' => f.write_str("\\n"),
            '\u{0c}' => f.write_str("\\f"),
            '\r' => f.write_str("\\r"),
            '"' => f.write_str("\\\""),
            '\\' => f.write_str("\\\\"),
            '\0'..='\u{1f}' | '\u{7f}' => write!(f, "\\u{:04X}", u32::from(c)),
            c => f.write_char(c),
        }?;
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::SpecificDataType;

    #[test]
    fn simple_literal_equality() {
        assert_eq!(
            Literal::new_simple_literal("foo"),
            Literal::new_typed_literal("foo", xsd::STRING)
        );
        assert_eq!(
            Literal::new_simple_literal("foo"),
            Literal::new("foo", Some(xsd::STRING.into()), None).unwrap()
        );
        assert_ne!(
            Literal::new_simple_literal("foo"),
            Literal::new_simple_literal("foo ")
        );
    }

    #[test]
    fn language_tag_case_matters() {
        let lower = Literal::new_language_tagged_literal("chat", "fr-fr").unwrap();
        let mixed = Literal::new_language_tagged_literal("chat", "fr-FR").unwrap();
        assert_eq!(mixed.language().unwrap().as_str(), "fr-FR");
        assert_ne!(lower, mixed);
        assert!(lower.eq_ignore_language_case(&mixed));
        assert!(!lower.eq_ignore_language_case(&Literal::new_simple_literal("chat")));
    }

    #[test]
    fn constructor_consistency() {
        let tagged = Literal::new(
            "chat",
            Some(rdf::LANG_STRING.into()),
            Some(LanguageTag::new_unchecked("fr")),
        )
        .unwrap();
        assert!(tagged.datatype().is_lang_string());
        assert!(matches!(
            Literal::new("1", Some(xsd::INTEGER.into()), Some(LanguageTag::new_unchecked("en"))),
            Err(LiteralError::LanguageWithDatatype(_))
        ));
        assert!(matches!(
            Literal::new("foo", Some(rdf::LANG_STRING.into()), None),
            Err(LiteralError::MissingLanguage)
        ));
        Literal::new_language_tagged_literal("foo", "not a tag").unwrap_err();
    }

    #[test]
    fn corrupted_datatype_is_reported() {
        let literal = Literal {
            value: "foo".into(),
            datatype: StringDataType::new_unchecked(xsd::INTEGER).into(),
            language: None,
        };
        literal.datatype_iri().unwrap_err();
        assert_eq!(literal, Literal::new_typed_literal("foo", xsd::INTEGER));
        assert_eq!(
            Literal {
                value: "foo".into(),
                datatype: SpecificDataType::new(xsd::STRING).into(),
                language: None,
            },
            Literal::new_simple_literal("foo")
        );
    }

    #[test]
    fn is_plain() {
        assert!(Literal::new_simple_literal("foo").is_plain());
        assert!(Literal::new_language_tagged_literal_unchecked("foo", "en").is_plain());
        assert!(!Literal::from(1).is_plain());
    }

    #[test]
    fn float_format() {
        assert_eq!("INF", Literal::from(f32::INFINITY).lexical_form());
        assert_eq!("INF", Literal::from(f64::INFINITY).lexical_form());
        assert_eq!("-INF", Literal::from(f32::NEG_INFINITY).lexical_form());
        assert_eq!("-INF", Literal::from(f64::NEG_INFINITY).lexical_form());
        assert_eq!("NaN", Literal::from(f32::NAN).lexical_form());
        assert_eq!("NaN", Literal::from(f64::NAN).lexical_form());
        assert_eq!(Literal::from(1.5_f64).datatype_iri().unwrap(), xsd::DOUBLE);
    }

    #[test]
    fn native_conversions() {
        assert_eq!(
            Literal::from(true),
            Literal::new_typed_literal("true", xsd::BOOLEAN)
        );
        assert_eq!(
            Literal::from(-12_i64),
            Literal::new_typed_literal("-12", xsd::INTEGER)
        );
        assert_eq!(Literal::from("foo"), Literal::new_simple_literal("foo"));
    }

    #[test]
    fn canonical_escaping() {
        assert_eq!(
            Literal::new_simple_literal("\u{0008}\u{0009}\u{000A}\u{000C}\u{000D}\u{0022}\u{005C}")
                .to_string(),
            r#""\b\t\n\f\r\"\\""#
        );
        assert_eq!(
            Literal::new_simple_literal("\u{0000}\u{001F}\u{007F}").to_string(),
            r#""\u0000\u001F\u007F""#
        );
        assert_eq!(Literal::new_simple_literal("é😀").to_string(), "\"é😀\"");
    }

    #[test]
    fn ntriples_string() {
        assert_eq!(
            Literal::new_language_tagged_literal_unchecked("foo", "en-GB").ntriples_string(),
            "\"foo\"@en-GB"
        );
        assert_eq!(
            Literal::from(3).ntriples_string(),
            "\"3\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        assert_eq!(Literal::new_simple_literal("").ntriples_string(), "\"\"");
    }
}
