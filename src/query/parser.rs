//! Mini-language query compiler.
//!
//! Grammar (whitespace-separated tokens):
//!
//! - `~label:surface` — a text token (`TOKEN`), label may be empty.
//! - `@label:surface` — an annotation term (`ANNOTATION`); `surface` is
//!   stored lowercased.
//! - `#name(headLabel,depLabel1,...,depLabelN)` — a constraint; `name` is
//!   `parent` or `contains`, case-insensitively; at least one dependent.
//!
//! Parsing is two-pass: the first pass walks `~`/`@` tokens to build the
//! label → element-index table, the second pass walks `#` tokens to turn
//! label references into `ConstraintEdge`s. A constraint referencing a
//! label that hasn't been declared, or declared twice, is a `SYNTAX_ERROR`.

use std::collections::HashMap;

use nom::{bytes::complete::*, character::complete::*, combinator::*, multi::*, sequence::*, IResult};

use crate::core::error::{Error, Result};
use crate::core::types::ElementType;
use crate::query::ast::{CompiledQuery, ConstraintEdge, ConstraintKind, QueryElement};
use crate::query::connectivity;

/// Characters a label may not contain.
fn is_label_char(c: char) -> bool {
    c != ',' && c != ' ' && c != '(' && c != ')' && c != ':'
}

fn label_chars(input: &str) -> IResult<&str, &str> {
    take_while(is_label_char)(input)
}

fn element_prefix(input: &str) -> IResult<&str, ElementType> {
    alt((
        map(char('~'), |_| ElementType::Token),
        map(char('@'), |_| ElementType::Annotation),
    ))(input)
}

/// Parses one `~label:surface` / `@label:surface` token. The surface is
/// everything after the first `:` — a whitespace-split token can't itself
/// contain whitespace, so no further delimiter is needed.
fn element_token(input: &str) -> IResult<&str, (ElementType, &str, &str)> {
    let (input, element_type) = element_prefix(input)?;
    let (input, label) = label_chars(input)?;
    let (input, _) = char(':')(input)?;
    Ok(("", (element_type, label, input)))
}

/// Parses one `#name(l1,l2,...,lN)` constraint token. `all_consuming` rejects
/// trailing garbage after the closing `)` (e.g. `#contains(a,b)x`) instead of
/// silently dropping it.
fn constraint_token(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    all_consuming(|input| {
        let (input, _) = char('#')(input)?;
        let (input, name) = take_while1(|c: char| c.is_ascii_alphabetic())(input)?;
        let (input, labels) =
            delimited(char('('), separated_list1(char(','), label_chars), char(')'))(input)?;
        Ok((input, (name, labels)))
    })(input)
}

/// Compiles a query string into a [`CompiledQuery`].
pub fn parse(input: &str) -> Result<CompiledQuery> {
    let raw_tokens: Vec<&str> = input.split_whitespace().collect();
    if raw_tokens.is_empty() {
        return Err(Error::syntax("empty query"));
    }

    let mut elements: Vec<QueryElement> = Vec::new();
    let mut label_to_index: HashMap<String, usize> = HashMap::new();
    let mut constraint_tokens: Vec<&str> = Vec::new();

    // First pass: elements, establishing label -> index.
    for &tok in &raw_tokens {
        if tok.starts_with('#') {
            constraint_tokens.push(tok);
            continue;
        }
        if !(tok.starts_with('~') || tok.starts_with('@')) {
            return Err(Error::syntax(format!(
                "token '{tok}' is missing a '~' or '@' prefix"
            )));
        }

        let (_, (element_type, label, surface)) = element_token(tok)
            .map_err(|_| Error::syntax(format!("malformed element '{tok}', expected prefix+label+':'+surface")))?;

        if surface.is_empty() {
            return Err(Error::syntax(format!("element '{tok}' has an empty surface after ':'")));
        }

        let stored_surface = match element_type {
            ElementType::Annotation => surface.to_lowercase(),
            ElementType::Token => surface.to_string(),
        };

        let label_opt = if label.is_empty() { None } else { Some(label.to_string()) };
        if let Some(ref l) = label_opt {
            if label_to_index.contains_key(l) {
                return Err(Error::syntax(format!("duplicate label '{l}'")));
            }
        }

        let index = elements.len();
        if let Some(ref l) = label_opt {
            label_to_index.insert(l.clone(), index);
        }
        elements.push(QueryElement {
            token: stored_surface,
            element_type,
            label: label_opt,
            connect_qty: 0,
            component_id: 0,
        });
    }

    if elements.is_empty() {
        return Err(Error::syntax("query has no token/annotation elements"));
    }

    // Second pass: constraints, expanding #name(head,dep1,...,depN) into N edges.
    let mut edges: Vec<ConstraintEdge> = Vec::new();
    for tok in constraint_tokens {
        let (_, (name, labels)) = constraint_token(tok)
            .map_err(|_| Error::syntax(format!("malformed constraint '{tok}'")))?;

        let kind = match name.to_ascii_lowercase().as_str() {
            "parent" => ConstraintKind::Parent,
            "contains" => ConstraintKind::Contains,
            other => return Err(Error::syntax(format!("unknown constraint name '{other}'"))),
        };

        if labels.len() < 2 {
            return Err(Error::syntax(format!(
                "constraint '{tok}' needs a head label and at least one dependent label"
            )));
        }

        let head_label = labels[0];
        let head_index = *label_to_index
            .get(head_label)
            .ok_or_else(|| Error::syntax(format!("unknown label '{head_label}' in '{tok}'")))?;

        for dep_label in &labels[1..] {
            let dep_index = *label_to_index
                .get(*dep_label)
                .ok_or_else(|| Error::syntax(format!("unknown label '{dep_label}' in '{tok}'")))?;
            edges.push(ConstraintEdge { head: head_index, dependent: dep_index, kind });
        }
    }

    let (connect_qty, component_id) = connectivity::compute(elements.len(), &edges);
    for (i, element) in elements.iter_mut().enumerate() {
        element.connect_qty = connect_qty[i];
        element.component_id = component_id[i];
    }

    Ok(CompiledQuery { elements, edges })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_plain_tokens_parse_with_no_constraints() {
        let q = parse("~w:cat ~w2:dog").unwrap();
        assert_eq!(q.elements.len(), 2);
        assert_eq!(q.elements[0].token, "cat");
        assert_eq!(q.elements[0].element_type, ElementType::Token);
        assert!(q.edges.is_empty());
    }

    #[test]
    fn contains_constraint_links_two_annotations() {
        let q = parse("@s:sent @w:cat #contains(s,w)").unwrap();
        assert_eq!(q.elements.len(), 2);
        assert_eq!(q.edges.len(), 1);
        assert_eq!(q.edges[0].kind, ConstraintKind::Contains);
        assert_eq!(q.edges[0].head, 0);
        assert_eq!(q.edges[0].dependent, 1);
        assert_eq!(q.elements[0].connect_qty, 2);
        assert_eq!(q.elements[1].connect_qty, 2);
    }

    #[test]
    fn multiple_constraints_over_three_elements_share_one_component() {
        let q = parse("@vp:vp @np:np @det:det #contains(vp,np) #parent(np,det)").unwrap();
        assert_eq!(q.edges.len(), 2);
        assert_eq!(q.elements[0].connect_qty, 3);
        assert_eq!(q.elements[1].connect_qty, 3);
        assert_eq!(q.elements[2].connect_qty, 3);
    }

    #[test]
    fn constraint_with_multiple_dependents_expands_to_multiple_edges() {
        let q = parse("@h:head @a:a @b:b #parent(h,a,b)").unwrap();
        assert_eq!(q.edges.len(), 2);
        assert!(q.edges.iter().all(|e| e.head == 0));
    }

    #[test]
    fn annotation_surface_is_lowercased() {
        let q = parse("@s:SENT").unwrap();
        assert_eq!(q.elements[0].token, "sent");
    }

    #[test]
    fn token_surface_is_not_lowercased() {
        let q = parse("~w:Cat").unwrap();
        assert_eq!(q.elements[0].token, "Cat");
    }

    #[test]
    fn empty_label_is_allowed_and_unreferenceable() {
        let q = parse("~:cat").unwrap();
        assert_eq!(q.elements[0].label, None);
        assert_eq!(q.elements[0].connect_qty, 0);
    }

    #[test]
    fn missing_prefix_is_syntax_error() {
        let err = parse("cat").unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::SyntaxError);
    }

    #[test]
    fn missing_colon_is_syntax_error() {
        let err = parse("~wcat").unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::SyntaxError);
    }

    #[test]
    fn unknown_constraint_name_is_syntax_error() {
        let err = parse("~a:a ~b:b #sibling(a,b)").unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::SyntaxError);
    }

    #[test]
    fn duplicate_label_is_syntax_error() {
        let err = parse("~a:cat @a:dog").unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::SyntaxError);
    }

    #[test]
    fn unknown_label_reference_is_syntax_error() {
        let err = parse("~a:cat #contains(a,z)").unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::SyntaxError);
    }

    #[test]
    fn single_label_constraint_is_syntax_error() {
        let err = parse("~a:cat #contains(a)").unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::SyntaxError);
    }

    #[test]
    fn missing_closing_paren_is_syntax_error() {
        let err = parse("~a:cat ~b:dog #contains(a,b").unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::SyntaxError);
    }

    #[test]
    fn case_insensitive_constraint_name() {
        let q = parse("@a:x @b:y #PARENT(a,b)").unwrap();
        assert_eq!(q.edges[0].kind, ConstraintKind::Parent);
    }

    #[test]
    fn trailing_garbage_after_constraint_is_syntax_error() {
        let err = parse("~a:cat ~b:dog #contains(a,b)x").unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::SyntaxError);
    }
}
