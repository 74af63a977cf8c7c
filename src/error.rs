use std::fmt;

use crate::ast::Span;
use crate::diagnostics::{Diagnostic, IntoDiagnostic};

/// Every validation failure. All variants are terminal: the first one raised
/// aborts the walk (§7). Carries only owned data so an `Error` outlives the
/// borrow of the AST/schema it was raised against.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// [`crate::rules::unique_operation_names`]
    DuplicateOperationName { name: String, span: Span },
    /// [`crate::rules::lone_anonymous_operation`]
    AnonymousOperationNotAlone { span: Span },
    /// [`crate::rules::unique_fragment_names`]
    DuplicateFragmentName { name: String, span: Span },
    /// [`crate::rules::no_unused_fragments`]
    UnusedFragment { name: String, span: Span },
    /// [`crate::rules::fields_defined_on_type`]
    UndefinedField {
        type_name: String,
        field_name: String,
        span: Span,
    },
    /// [`crate::rules::arguments_defined_on_type`]
    UndefinedArgument {
        field_name: String,
        argument_name: String,
        span: Span,
    },
    /// [`crate::rules::scalar_fields_are_leaves`]
    ScalarSubselection {
        field_name: String,
        type_name: String,
        span: Span,
    },
    /// [`crate::rules::composite_fields_are_not_leaves`]
    MissingSubselection {
        field_name: String,
        type_name: String,
        span: Span,
    },
    /// [`crate::rules::directives_are_defined`]
    UnknownDirective { name: String, span: Span },
    /// [`crate::rules::fragment_spread_target_defined`]
    UndefinedFragment { name: String, span: Span },
    /// [`crate::rules::fragment_has_valid_type`]
    InvalidFragmentType { type_name: String, span: Span },
    /// [`crate::rules::arguments_of_correct_type`]
    ListValueRequired { argument_name: String, span: Span },
    /// [`crate::rules::arguments_of_correct_type`]
    InputObjectValueRequired {
        argument_name: String,
        type_name: String,
        span: Span,
    },
    /// [`crate::rules::arguments_of_correct_type`] and
    /// [`crate::rules::unique_input_object_fields`]
    UnknownInputObjectField {
        type_name: String,
        field_name: String,
        span: Span,
    },
    /// [`crate::rules::unique_input_object_fields`]
    DuplicateInputObjectField { field_name: String, span: Span },
    /// [`crate::rules::arguments_of_correct_type`]
    InvalidEnumValue {
        type_name: String,
        value: String,
        span: Span,
    },
    /// [`crate::rules::arguments_of_correct_type`]
    InvalidScalarValue {
        type_name: String,
        argument_name: String,
        span: Span,
    },
    /// [`crate::rules::unique_argument_names`]
    DuplicateArgumentName { name: String, span: Span },
    /// [`crate::rules::required_arguments_present`]
    MissingRequiredArgument {
        field_name: String,
        argument_name: String,
        span: Span,
    },
    /// [`crate::rules::fragment_definition_has_no_cycles`]
    FragmentCycle { name: String, span: Span },
    /// [`crate::rules::fragment_spread_is_possible`]
    ImpossibleFragmentSpread { type_name: String, span: Span },
    /// [`crate::rules::unambiguous_selections`]
    AmbiguousSelectionName { output_key: String, span: Span },
    /// [`crate::rules::unambiguous_selections`]
    AmbiguousSelectionType { output_key: String, span: Span },
    /// [`crate::rules::unambiguous_selections`]
    AmbiguousSelectionArguments { output_key: String, span: Span },
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::DuplicateOperationName { span, .. }
            | Error::AnonymousOperationNotAlone { span }
            | Error::DuplicateFragmentName { span, .. }
            | Error::UnusedFragment { span, .. }
            | Error::UndefinedField { span, .. }
            | Error::UndefinedArgument { span, .. }
            | Error::ScalarSubselection { span, .. }
            | Error::MissingSubselection { span, .. }
            | Error::UnknownDirective { span, .. }
            | Error::UndefinedFragment { span, .. }
            | Error::InvalidFragmentType { span, .. }
            | Error::ListValueRequired { span, .. }
            | Error::InputObjectValueRequired { span, .. }
            | Error::UnknownInputObjectField { span, .. }
            | Error::DuplicateInputObjectField { span, .. }
            | Error::InvalidEnumValue { span, .. }
            | Error::InvalidScalarValue { span, .. }
            | Error::DuplicateArgumentName { span, .. }
            | Error::MissingRequiredArgument { span, .. }
            | Error::FragmentCycle { span, .. }
            | Error::ImpossibleFragmentSpread { span, .. }
            | Error::AmbiguousSelectionName { span, .. }
            | Error::AmbiguousSelectionType { span, .. }
            | Error::AmbiguousSelectionArguments { span, .. } => *span,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateOperationName { name, .. } => {
                write!(f, "There can be only one operation named \"{}\".", name)
            }
            Error::AnonymousOperationNotAlone { .. } => write!(
                f,
                "This anonymous operation must be the only defined operation."
            ),
            Error::DuplicateFragmentName { name, .. } => {
                write!(f, "There can be only one fragment named \"{}\".", name)
            }
            Error::UnusedFragment { name, .. } => {
                write!(f, "Fragment \"{}\" was not used.", name)
            }
            Error::UndefinedField {
                type_name,
                field_name,
                ..
            } => write!(
                f,
                "Field \"{}\" is not defined on type \"{}\".",
                field_name, type_name
            ),
            Error::UndefinedArgument {
                field_name,
                argument_name,
                ..
            } => write!(
                f,
                "Unknown argument \"{}\" on field \"{}\".",
                argument_name, field_name
            ),
            Error::ScalarSubselection { type_name, .. } => write!(
                f,
                "Scalar values cannot have subselections (type \"{}\").",
                type_name
            ),
            Error::MissingSubselection { type_name, .. } => write!(
                f,
                "Composite types must have subselections (type \"{}\").",
                type_name
            ),
            Error::UnknownDirective { name, .. } => {
                write!(f, "Unknown directive \"{}\".", name)
            }
            Error::UndefinedFragment { name, .. } => {
                write!(f, "Unknown fragment \"{}\".", name)
            }
            Error::InvalidFragmentType { type_name, .. } => write!(
                f,
                "Fragment type condition \"{}\" is not an object, interface, or union.",
                type_name
            ),
            Error::ListValueRequired { argument_name, .. } => write!(
                f,
                "Expected a list value for argument \"{}\".",
                argument_name
            ),
            Error::InputObjectValueRequired {
                argument_name,
                type_name,
                ..
            } => write!(
                f,
                "Expected an input object value of type \"{}\" for argument \"{}\".",
                type_name, argument_name
            ),
            Error::UnknownInputObjectField {
                type_name,
                field_name,
                ..
            } => write!(
                f,
                "Field \"{}\" is not defined on input type \"{}\".",
                field_name, type_name
            ),
            Error::DuplicateInputObjectField { field_name, .. } => write!(
                f,
                "There can be only one input field named \"{}\".",
                field_name
            ),
            Error::InvalidEnumValue {
                type_name, value, ..
            } => write!(f, "Value \"{}\" is not a member of enum \"{}\".", value, type_name),
            Error::InvalidScalarValue {
                type_name,
                argument_name,
                ..
            } => write!(
                f,
                "Value for argument \"{}\" cannot be coerced to scalar \"{}\".",
                argument_name, type_name
            ),
            Error::DuplicateArgumentName { name, .. } => {
                write!(f, "There can be only one argument named \"{}\".", name)
            }
            Error::MissingRequiredArgument { argument_name, .. } => write!(
                f,
                "Required argument \"{}\" was not supplied.",
                argument_name
            ),
            Error::FragmentCycle { name, .. } => {
                write!(f, "Cannot spread fragment \"{}\" within itself.", name)
            }
            Error::ImpossibleFragmentSpread { type_name, .. } => write!(
                f,
                "Fragment type condition is not possible for given type \"{}\".",
                type_name
            ),
            Error::AmbiguousSelectionName { output_key, .. } => write!(
                f,
                "Type name mismatch: fields for \"{}\" cannot be merged.",
                output_key
            ),
            Error::AmbiguousSelectionType { output_key, .. } => write!(
                f,
                "Return type mismatch: fields for \"{}\" cannot be merged.",
                output_key
            ),
            Error::AmbiguousSelectionArguments { output_key, .. } => write!(
                f,
                "Argument mismatch: fields for \"{}\" cannot be merged.",
                output_key
            ),
        }
    }
}

impl std::error::Error for Error {}

impl IntoDiagnostic for Error {
    fn into_diagnostic(self) -> Diagnostic {
        let (rule, span) = match &self {
            Error::DuplicateOperationName { span, .. } => ("uniqueOperationNames", *span),
            Error::AnonymousOperationNotAlone { span } => ("loneAnonymousOperation", *span),
            Error::DuplicateFragmentName { span, .. } => ("uniqueFragmentNames", *span),
            Error::UnusedFragment { span, .. } => ("noUnusedFragments", *span),
            Error::UndefinedField { span, .. } => ("fieldsDefinedOnType", *span),
            Error::UndefinedArgument { span, .. } => ("argumentsDefinedOnType", *span),
            Error::ScalarSubselection { span, .. } => ("scalarFieldsAreLeaves", *span),
            Error::MissingSubselection { span, .. } => ("compositeFieldsAreNotLeaves", *span),
            Error::UnknownDirective { span, .. } => ("directivesAreDefined", *span),
            Error::UndefinedFragment { span, .. } => ("fragmentSpreadTargetDefined", *span),
            Error::InvalidFragmentType { span, .. } => ("fragmentHasValidType", *span),
            Error::ListValueRequired { span, .. } => ("argumentsOfCorrectType", *span),
            Error::InputObjectValueRequired { span, .. } => ("argumentsOfCorrectType", *span),
            Error::UnknownInputObjectField { span, .. } => ("argumentsOfCorrectType", *span),
            Error::DuplicateInputObjectField { span, .. } => ("uniqueInputObjectFields", *span),
            Error::InvalidEnumValue { span, .. } => ("argumentsOfCorrectType", *span),
            Error::InvalidScalarValue { span, .. } => ("argumentsOfCorrectType", *span),
            Error::DuplicateArgumentName { span, .. } => ("uniqueArgumentNames", *span),
            Error::MissingRequiredArgument { span, .. } => ("requiredArgumentsPresent", *span),
            Error::FragmentCycle { span, .. } => ("fragmentDefinitionHasNoCycles", *span),
            Error::ImpossibleFragmentSpread { span, .. } => ("fragmentSpreadIsPossible", *span),
            Error::AmbiguousSelectionName { span, .. } => ("unambiguousSelections", *span),
            Error::AmbiguousSelectionType { span, .. } => ("unambiguousSelections", *span),
            Error::AmbiguousSelectionArguments { span, .. } => ("unambiguousSelections", *span),
        };

        Diagnostic::new(rule).message(self.to_string()).label(self.to_string(), span)
    }
}
