use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::HashSet;
use syn::{
    Expr, ExprLit, Field, Fields, Ident, ItemStruct, Lit, LitStr, Meta, Path, Token,
    parse_macro_input, parse_quote, parse_str, punctuated::Punctuated,
};

/// Column names and trait location used when expanding `#[base_entity]`.
struct BaseEntityConfig {
    traits_path: Path,
    active_model_ident: Ident,
    id_field: Ident,
    created_at_field: Ident,
    updated_at_field: Ident,
}

impl Default for BaseEntityConfig {
    fn default() -> Self {
        Self {
            traits_path: parse_str("crate::db::dao::base_traits")
                .expect("default traits path should parse"),
            active_model_ident: Ident::new("ActiveModel", Span::call_site()),
            id_field: Ident::new("id", Span::call_site()),
            created_at_field: Ident::new("created_at", Span::call_site()),
            updated_at_field: Ident::new("updated_at", Span::call_site()),
        }
    }
}

/// Prepends the uuid primary key and the creation/update timestamps to a
/// sea-orm `Model`, and implements the DAO bookkeeping traits for it.
///
/// ```ignore
/// #[base_entity(created_at = "timestamp")]
/// #[sea_orm::model]
/// #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
/// #[sea_orm(table_name = "time_entries")]
/// pub struct Model { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn base_entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with Punctuated<Meta, Token![,]>::parse_terminated);
    let mut config = BaseEntityConfig::default();
    if let Err(err) = apply_args(&mut config, args) {
        return err.to_compile_error().into();
    }

    let mut input = parse_macro_input!(item as ItemStruct);
    let Fields::Named(fields) = &mut input.fields else {
        return syn::Error::new_spanned(input, "base_entity requires a struct with named fields")
            .to_compile_error()
            .into();
    };

    let existing: HashSet<String> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| ident.to_string()))
        .collect();

    let mut generated: Punctuated<Field, Token![,]> = Punctuated::new();

    if !existing.contains(&config.id_field.to_string()) {
        let ident = &config.id_field;
        generated.push(parse_quote! {
            #[sea_orm(primary_key, auto_increment = false)]
            pub #ident: uuid::Uuid
        });
    }

    for ident in [&config.created_at_field, &config.updated_at_field] {
        if existing.contains(&ident.to_string()) {
            continue;
        }
        generated.push(parse_quote! {
            #[sea_orm(default_expr = "Expr::current_timestamp()")]
            pub #ident: sea_orm::entity::prelude::DateTimeWithTimeZone
        });
    }

    generated.extend(fields.named.iter().cloned());
    fields.named = generated;

    let traits_path = &config.traits_path;
    let active_model = &config.active_model_ident;
    let id_field = &config.id_field;
    let created_at_field = &config.created_at_field;
    let updated_at_field = &config.updated_at_field;
    let created_at_column = Ident::new(
        &to_pascal_case(&created_at_field.to_string()),
        created_at_field.span(),
    );

    let expanded = quote! {
        #input

        impl #traits_path::HasIdActiveModel for #active_model {
            fn set_id(&mut self, id: uuid::Uuid) {
                self.#id_field = sea_orm::ActiveValue::Set(id);
            }
        }

        impl #traits_path::TimestampedActiveModel for #active_model {
            fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.#created_at_field = sea_orm::ActiveValue::Set(ts);
            }

            fn set_updated_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.#updated_at_field = sea_orm::ActiveValue::Set(ts);
            }
        }

        impl #traits_path::HasCreatedAtColumn for Entity {
            fn created_at_column() -> Column {
                Column::#created_at_column
            }
        }
    };

    expanded.into()
}

fn apply_args(
    config: &mut BaseEntityConfig,
    args: Punctuated<Meta, Token![,]>,
) -> Result<(), syn::Error> {
    for meta in args {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value pair, e.g. created_at = \"timestamp\"",
            ));
        };

        let Some(key) = name_value.path.get_ident().map(|ident| ident.to_string()) else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "expected simple identifier for attribute key",
            ));
        };

        let value = string_literal(name_value.value)?;

        match key.as_str() {
            "traits" => {
                config.traits_path = value.parse::<Path>().map_err(|err| {
                    syn::Error::new(value.span(), format!("invalid traits path: {err}"))
                })?;
            }
            "active_model" => config.active_model_ident = ident_from(&value),
            "id" => config.id_field = ident_from(&value),
            "created_at" => config.created_at_field = ident_from(&value),
            "updated_at" => config.updated_at_field = ident_from(&value),
            _ => {
                return Err(syn::Error::new(
                    value.span(),
                    format!("unknown base_entity attribute key `{key}`"),
                ));
            }
        }
    }

    Ok(())
}

fn string_literal(expr: Expr) -> Result<LitStr, syn::Error> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit_str),
            ..
        }) => Ok(lit_str),
        other => Err(syn::Error::new_spanned(
            other,
            "expected string literal for attribute value",
        )),
    }
}

fn ident_from(value: &LitStr) -> Ident {
    Ident::new(&value.value(), value.span())
}

fn to_pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
