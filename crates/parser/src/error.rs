use atoms::JsWord;
use global_common::Span;
use std::borrow::Cow;

/// A syntax error, packed so that `PResult<T>` stays a single word wide on
/// the happy path.
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    pub error: Box<(Span, SyntaxError)>,
}

impl Error {
    pub fn span(&self) -> Span {
        self.error.0
    }

    pub fn kind(&self) -> &SyntaxError {
        &self.error.1
    }

    pub fn into_inner(self) -> (Span, SyntaxError) {
        *self.error
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxError {
    Eof,
    UnexpectedToken {
        got: String,
    },
    /// Unknown character, e.g. '\u{1234}'.
    UnexpectedChar {
        c: char,
    },

    InvalidLHSInAssignment,
    StrictEvalArguments,
    StrictLHSAssignment,
    StrictDelete,
    DeletePrivateField,
    StrictWith,
    IllegalUseStrict,

    YieldInParameter,
    AwaitInParameter,
    AwaitBindingIdentifier,
    YieldBindingIdentifier,
    UnexpectedReserved,
    UnexpectedStrictReserved,
    EscapeInReservedWord {
        word: JsWord,
    },

    BadGetterArity,
    BadSetterArity,
    BadSetterRestParameter,
    DuplicateProto,

    DuplicateConstructor,
    ConstructorIsGenerator,
    ConstructorIsAsync,
    ConstructorSpecialMethod,
    StaticPrototype,
    PrivateFieldConstructor,
    ConstructorClassField,

    UnterminatedString,
    UnterminatedRegExp,
    UnterminatedTpl,
    UnterminatedBlockComment,
    UnterminatedJSXContents,

    ExpectedJSXClosingTag {
        tag: JsWord,
    },
    EmptyJSXAttr,

    MetaNotInFunctionBody,
    InvalidNewMetaProp,
    ImportMetaInScript,
    UnexpectedSuper,

    IdentAfterNum,
    LegacyOctal,
    LegacyDecimal,
    NumericSeparatorIsAllowedOnlyBetweenTwoDigits,
    NumLitTerminatedWithExp,
    ExpectedDigit {
        radix: u8,
    },
    InvalidBigIntLiteral,

    DuplicateRegExpFlags,
    MalformedRegExpFlags,

    InvalidCodePoint,
    InvalidHexEscape,
    MissingUnicodeEscape,
    EscapedCharNotAnIdentifier,
    StrictOctalEscape,
    InvalidTplEscape,

    UnexpectedDigitAfterHash,
    SpaceBetweenHashAndIdent,

    LineBreakBeforeArrow,
    NullishCoalescingWithLogicalOp,
    UnaryInExp,

    TooManyVarInForInHead,
    VarInitializerInForInHead,
    PatVarWithoutInit,
    ConstWithoutInit,
    ForAwaitNotInAsync,

    CommaAfterRestElement,
    NonLastRestParam,
    RestDefaultInitializer,

    AwaitForStmt,

    DeclNotAllowed,
    LabelledGenerator,

    ReturnNotAllowed,
    IllegalBreak,
    IllegalContinue,
    DuplicateLabel {
        label: JsWord,
    },
    UndefinedLabel {
        label: JsWord,
    },
    MultipleDefaultsInSwitch,
    NewlineAfterThrow,
    NoCatchOrFinally,
}

impl SyntaxError {
    pub fn msg(&self) -> Cow<'static, str> {
        match self {
            SyntaxError::Eof => "Unexpected token 'end of source'".into(),
            SyntaxError::UnexpectedToken { got } => format!("Unexpected token '{}'", got).into(),
            SyntaxError::UnexpectedChar { c } => format!("Invalid character '{}'", c).into(),

            SyntaxError::InvalidLHSInAssignment => "Invalid left-hand side in assignment".into(),
            SyntaxError::StrictEvalArguments => {
                "Unexpected eval or arguments in strict mode".into()
            }
            SyntaxError::StrictLHSAssignment => {
                "Assignment to eval or arguments is not allowed in strict mode".into()
            }
            SyntaxError::StrictDelete => {
                "Delete of an unqualified identifier in strict mode".into()
            }
            SyntaxError::DeletePrivateField => "Private fields can not be deleted".into(),
            SyntaxError::StrictWith => {
                "Strict mode code may not include a with statement".into()
            }
            SyntaxError::IllegalUseStrict => {
                "Illegal 'use strict' directive in function with non-simple parameter list".into()
            }

            SyntaxError::YieldInParameter => {
                "Yield expression not allowed in formal parameter".into()
            }
            SyntaxError::AwaitInParameter => {
                "Await expression not allowed in formal parameter".into()
            }
            SyntaxError::AwaitBindingIdentifier => {
                "'await' is not a valid identifier inside an async function".into()
            }
            SyntaxError::YieldBindingIdentifier => {
                "'yield' is not a valid identifier inside a generator".into()
            }
            SyntaxError::UnexpectedReserved => "Unexpected reserved word".into(),
            SyntaxError::UnexpectedStrictReserved => {
                "Unexpected strict mode reserved word".into()
            }
            SyntaxError::EscapeInReservedWord { word } => {
                format!("Keyword '{}' must not contain escaped characters", word).into()
            }

            SyntaxError::BadGetterArity => "Getter must not have any formal parameters".into(),
            SyntaxError::BadSetterArity => "Setter must have exactly one formal parameter".into(),
            SyntaxError::BadSetterRestParameter => {
                "Setter function argument must not be a rest parameter".into()
            }
            SyntaxError::DuplicateProto => {
                "Property name __proto__ appears more than once in object literal".into()
            }
            SyntaxError::DuplicateConstructor => {
                "A class may only have one constructor".into()
            }
            SyntaxError::ConstructorIsGenerator => {
                "Class constructor may not be a generator".into()
            }
            SyntaxError::ConstructorIsAsync => "Class constructor may not be async".into(),
            SyntaxError::ConstructorSpecialMethod => {
                "Class constructor may not be an accessor".into()
            }
            SyntaxError::StaticPrototype => {
                "Classes may not have a static property named prototype".into()
            }
            SyntaxError::PrivateFieldConstructor => {
                "Classes may not have a private field named '#constructor'".into()
            }
            SyntaxError::ConstructorClassField => {
                "Classes may not have a field named 'constructor'".into()
            }

            SyntaxError::UnterminatedString => "Unterminated string literal".into(),
            SyntaxError::UnterminatedRegExp => {
                "Unterminated regular expression literal".into()
            }
            SyntaxError::UnterminatedTpl => "Unterminated template literal".into(),
            SyntaxError::UnterminatedBlockComment => "Unterminated comment".into(),
            SyntaxError::UnterminatedJSXContents => "Unterminated JSX contents".into(),

            SyntaxError::ExpectedJSXClosingTag { tag } => {
                format!("Expected corresponding JSX closing tag for '{}'", tag).into()
            }
            SyntaxError::EmptyJSXAttr => {
                "JSX attributes must only be assigned a non-empty expression".into()
            }

            SyntaxError::MetaNotInFunctionBody => {
                "new.target only allowed within functions".into()
            }
            SyntaxError::InvalidNewMetaProp => {
                "The only valid meta property for new is new.target".into()
            }
            SyntaxError::ImportMetaInScript => {
                "Cannot use 'import.meta' outside a module".into()
            }
            SyntaxError::UnexpectedSuper => {
                "'super' keyword is only valid as a member expression base".into()
            }

            SyntaxError::IdentAfterNum => {
                "Identifier starts immediately after numeric literal".into()
            }
            SyntaxError::LegacyOctal => {
                "Octal literals are not allowed in strict mode".into()
            }
            SyntaxError::LegacyDecimal => {
                "Decimals with leading zeros are not allowed in strict mode".into()
            }
            SyntaxError::NumericSeparatorIsAllowedOnlyBetweenTwoDigits => {
                "A numeric separator is only allowed between two digits".into()
            }
            SyntaxError::NumLitTerminatedWithExp => {
                "Expected digits after the exponent sign".into()
            }
            SyntaxError::ExpectedDigit { radix } => format!(
                "Expected {} digit",
                match radix {
                    2 => "a binary",
                    8 => "an octal",
                    10 => "a decimal",
                    16 => "a hexadecimal",
                    _ => unreachable!(),
                }
            )
            .into(),
            SyntaxError::InvalidBigIntLiteral => "Invalid BigInt literal".into(),

            SyntaxError::DuplicateRegExpFlags => "Duplicate regular expression flag".into(),
            SyntaxError::MalformedRegExpFlags => "Invalid regular expression flag".into(),

            SyntaxError::InvalidCodePoint => {
                "Unicode escape code point out of range".into()
            }
            SyntaxError::InvalidHexEscape => "Invalid hexadecimal escape sequence".into(),
            SyntaxError::MissingUnicodeEscape => {
                "Expecting Unicode escape sequence \\uXXXX".into()
            }
            SyntaxError::EscapedCharNotAnIdentifier => {
                "Invalid Unicode escape sequence".into()
            }
            SyntaxError::StrictOctalEscape => {
                "Octal escape sequences are not allowed in strict mode".into()
            }
            SyntaxError::InvalidTplEscape => {
                "Invalid escape sequence in template literal".into()
            }

            SyntaxError::UnexpectedDigitAfterHash => "Unexpected digit after hash token".into(),
            SyntaxError::SpaceBetweenHashAndIdent => {
                "Unexpected space between # and identifier".into()
            }

            SyntaxError::LineBreakBeforeArrow => {
                "No line break is allowed before '=>'".into()
            }
            SyntaxError::NullishCoalescingWithLogicalOp => {
                "Cannot use '??' unparenthesized within '||' or '&&' expressions".into()
            }
            SyntaxError::UnaryInExp => {
                "Unary expressions as the left operand of an exponentiation expression must be \
                 disambiguated with parentheses"
                    .into()
            }

            SyntaxError::TooManyVarInForInHead => {
                "Only a single declaration is allowed in a for-in/for-of head".into()
            }
            SyntaxError::VarInitializerInForInHead => {
                "A loop variable declaration in a for-in/for-of head may not have an initializer"
                    .into()
            }
            SyntaxError::PatVarWithoutInit => {
                "Missing initializer in destructuring declaration".into()
            }
            SyntaxError::ConstWithoutInit => {
                "Missing initializer in const declaration".into()
            }
            SyntaxError::ForAwaitNotInAsync => {
                "'for await' is only valid in async functions and async generators".into()
            }
            SyntaxError::AwaitForStmt => {
                "'for await' loops must iterate with 'of'".into()
            }

            SyntaxError::DeclNotAllowed => {
                "Declaration is not allowed in this position".into()
            }
            SyntaxError::LabelledGenerator => {
                "Generator declarations cannot be labelled".into()
            }

            SyntaxError::CommaAfterRestElement => {
                "A trailing comma is not permitted after the rest element".into()
            }
            SyntaxError::NonLastRestParam => "Rest element must be last element".into(),
            SyntaxError::RestDefaultInitializer => {
                "Rest elements cannot have a default value".into()
            }

            SyntaxError::ReturnNotAllowed => "Illegal return statement".into(),
            SyntaxError::IllegalBreak => "Illegal break statement".into(),
            SyntaxError::IllegalContinue => "Illegal continue statement".into(),
            SyntaxError::DuplicateLabel { label } => {
                format!("Label '{}' has already been declared", label).into()
            }
            SyntaxError::UndefinedLabel { label } => {
                format!("Undefined label '{}'", label).into()
            }
            SyntaxError::MultipleDefaultsInSwitch => {
                "More than one default clause in switch statement".into()
            }
            SyntaxError::NewlineAfterThrow => "Illegal newline after throw".into(),
            SyntaxError::NoCatchOrFinally => "Missing catch or finally after try".into(),
        }
    }
}
