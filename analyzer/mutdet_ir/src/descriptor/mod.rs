//! Declared field types.
//!
//! A `TypeDescriptor` is what a field is declared as: a primitive, an array,
//! or a reference to another class. References carry the decoder's knowledge
//! of the referenced class's shape (interface, abstract, concrete) and any
//! generic type arguments from the field's signature.

use std::fmt;

use crate::Dotted;

/// The eight primitive types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    /// Source-level keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    fn from_descriptor_char(c: char) -> Option<Self> {
        Some(match c {
            'Z' => PrimitiveType::Boolean,
            'B' => PrimitiveType::Byte,
            'C' => PrimitiveType::Char,
            'S' => PrimitiveType::Short,
            'I' => PrimitiveType::Int,
            'J' => PrimitiveType::Long,
            'F' => PrimitiveType::Float,
            'D' => PrimitiveType::Double,
            _ => return None,
        })
    }
}

/// What the decoder knows about a referenced class.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeShape {
    /// A concrete class.
    Concrete { is_final: bool },
    /// An abstract class.
    Abstract,
    /// An interface.
    Interface,
    /// The referenced class was not inspected.
    #[default]
    Unknown,
}

impl TypeShape {
    /// Interfaces and abstract classes: the runtime type behind the
    /// reference is some unseen implementation.
    pub fn is_abstract(self) -> bool {
        matches!(self, TypeShape::Abstract | TypeShape::Interface)
    }

    /// The object behind a reference of this shape may be an instance of
    /// some other class: anything but a concrete final class. An
    /// uninspected class counts as open.
    pub fn admits_subtypes(self) -> bool {
        !matches!(self, TypeShape::Concrete { is_final: true })
    }
}

/// A reference to another class, as used in a field declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef {
    pub name: Dotted,
    pub shape: TypeShape,
    /// Generic arguments from the field signature (`List<Date>` has one).
    pub type_arguments: Vec<TypeDescriptor>,
}

/// The declared type of a field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeDescriptor {
    Primitive(PrimitiveType),
    Array(Box<TypeDescriptor>),
    Reference(TypeRef),
}

/// Most dimensions a class file array type may declare.
pub const MAX_ARRAY_DIMENSIONS: usize = 255;

/// A field descriptor string that could not be parsed.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("empty descriptor")]
    Empty,
    #[error("unknown descriptor tag {tag:?} in `{descriptor}`")]
    UnknownTag { descriptor: String, tag: char },
    #[error("unterminated class reference in `{descriptor}`")]
    Unterminated { descriptor: String },
    #[error("trailing characters in `{descriptor}`")]
    Trailing { descriptor: String },
    #[error("array in `{descriptor}` has more than {MAX_ARRAY_DIMENSIONS} dimensions")]
    TooManyDimensions { descriptor: String },
    #[error(transparent)]
    Name(#[from] crate::InvalidName),
}

impl TypeDescriptor {
    pub fn primitive(primitive: PrimitiveType) -> Self {
        TypeDescriptor::Primitive(primitive)
    }

    pub fn int() -> Self {
        TypeDescriptor::Primitive(PrimitiveType::Int)
    }

    pub fn array_of(component: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(component))
    }

    /// A reference to a class with the given shape and no type arguments.
    pub fn reference(name: Dotted, shape: TypeShape) -> Self {
        TypeDescriptor::Reference(TypeRef {
            name,
            shape,
            type_arguments: Vec::new(),
        })
    }

    pub fn interface(name: Dotted) -> Self {
        Self::reference(name, TypeShape::Interface)
    }

    pub fn abstract_class(name: Dotted) -> Self {
        Self::reference(name, TypeShape::Abstract)
    }

    pub fn concrete(name: Dotted, is_final: bool) -> Self {
        Self::reference(name, TypeShape::Concrete { is_final })
    }

    /// Attach generic type arguments. No effect on primitives and arrays.
    #[must_use]
    pub fn with_type_arguments(mut self, arguments: Vec<TypeDescriptor>) -> Self {
        if let TypeDescriptor::Reference(type_ref) = &mut self {
            type_ref.type_arguments = arguments;
        }
        self
    }

    /// Parse a class file field descriptor (`I`, `[J`, `Ljava/util/List;`).
    ///
    /// References come back with `TypeShape::Unknown`; the shape is only
    /// known once the referenced class has been inspected.
    pub fn from_descriptor(descriptor: &str) -> Result<Self, DescriptorError> {
        let (parsed, rest) = parse_one(descriptor, descriptor)?;
        if !rest.is_empty() {
            return Err(DescriptorError::Trailing {
                descriptor: descriptor.to_owned(),
            });
        }
        Ok(parsed)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_))
    }

    pub fn as_reference(&self) -> Option<&TypeRef> {
        match self {
            TypeDescriptor::Reference(type_ref) => Some(type_ref),
            _ => None,
        }
    }

    /// Name of the referenced class, if this is a reference type.
    pub fn reference_name(&self) -> Option<&Dotted> {
        self.as_reference().map(|type_ref| &type_ref.name)
    }
}

fn parse_one<'a>(
    input: &'a str,
    descriptor: &str,
) -> Result<(TypeDescriptor, &'a str), DescriptorError> {
    let element = input.trim_start_matches('[');
    let dimensions = input.len() - element.len();
    if dimensions > MAX_ARRAY_DIMENSIONS {
        return Err(DescriptorError::TooManyDimensions {
            descriptor: descriptor.to_owned(),
        });
    }
    let mut chars = element.chars();
    let Some(tag) = chars.next() else {
        return Err(if dimensions == 0 {
            DescriptorError::Empty
        } else {
            DescriptorError::Unterminated {
                descriptor: descriptor.to_owned(),
            }
        });
    };
    let rest = chars.as_str();
    let (mut parsed, rest) = if let Some(primitive) = PrimitiveType::from_descriptor_char(tag) {
        (TypeDescriptor::Primitive(primitive), rest)
    } else if tag == 'L' {
        let Some((internal, rest)) = rest.split_once(';') else {
            return Err(DescriptorError::Unterminated {
                descriptor: descriptor.to_owned(),
            });
        };
        let name = Dotted::new(internal)?;
        (TypeDescriptor::reference(name, TypeShape::Unknown), rest)
    } else {
        return Err(DescriptorError::UnknownTag {
            descriptor: descriptor.to_owned(),
            tag,
        });
    };
    for _ in 0..dimensions {
        parsed = TypeDescriptor::array_of(parsed);
    }
    Ok((parsed, rest))
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(primitive) => f.write_str(primitive.keyword()),
            TypeDescriptor::Array(component) => write!(f, "{component}[]"),
            TypeDescriptor::Reference(type_ref) => {
                write!(f, "{}", type_ref.name)?;
                if let Some((first, rest)) = type_ref.type_arguments.split_first() {
                    write!(f, "<{first}")?;
                    for argument in rest {
                        write!(f, ", {argument}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Test code uses unwrap for clarity")]
mod tests;
