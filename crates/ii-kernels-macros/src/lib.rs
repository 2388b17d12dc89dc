//! # ii-kernels-macros
//!
//! Compile-time binding checks for fixture kernels.
//!
//! ## `#[contract]` Attribute
//!
//! Ties a kernel function to an equation of a YAML contract under
//! `contracts/`. The kernel crate's `build.rs` reads `contracts/binding.yaml`
//! and exports `CONTRACT_<STEM>_<EQUATION>=bound` for every implemented
//! binding; the attribute reads that variable with `env!()`, so a kernel whose
//! binding is missing or not implemented does not compile.
//!
//! ```rust,ignore
//! use ii_kernels_macros::contract;
//!
//! #[contract("scalar-temporary-v1", equation = "scalar_temporary")]
//! pub fn scalar_temporary_scalar(a: &[i32; 100], b: &[i32; 100], c: &[i32; 100], d: &[i32; 100]) -> i32 {
//!     // ...
//! }
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::{Expr, ItemFn, Lit, Meta, Token, parse_macro_input};

/// Arguments to `#[contract("contract-stem", equation = "equation-name")]`
struct ContractArgs {
    contract_stem: String,
    equation_name: String,
}

impl Parse for ContractArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let stem_lit: Lit = input.parse()?;
        let Lit::Str(stem) = &stem_lit else {
            return Err(syn::Error::new_spanned(
                &stem_lit,
                "expected string literal for contract stem",
            ));
        };
        let contract_stem = stem.value();

        input.parse::<Token![,]>()?;

        let meta: Meta = input.parse()?;
        let equation_name = match &meta {
            Meta::NameValue(nv) if nv.path.is_ident("equation") => match &nv.value {
                Expr::Lit(expr_lit) => match &expr_lit.lit {
                    Lit::Str(s) => s.value(),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "expected string literal for equation name",
                        ));
                    }
                },
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected string literal for equation name",
                    ));
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    meta,
                    "expected `equation = \"...\"`",
                ));
            }
        };

        Ok(ContractArgs {
            contract_stem,
            equation_name,
        })
    }
}

/// Compile-time contract binding attribute.
///
/// Expands to the original function with two consts prepended to its body:
///
/// 1. `_CONTRACT_CHECK_*` reads `CONTRACT_<STEM>_<EQUATION>` via `env!()`.
///    A missing variable is a compile error.
/// 2. `_CONTRACT_BINDING_*` records contract, equation, module and function
///    name for traceability.
///
/// The consts live inside the body so the attribute also works on trait impl
/// methods, which may not declare extra associated items.
#[proc_macro_attribute]
pub fn contract(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ContractArgs);
    let input_fn = parse_macro_input!(item as ItemFn);

    let env_key = make_env_key(&args.contract_stem, &args.equation_name);
    let suffix = format!(
        "{}_{}",
        screaming(&args.contract_stem),
        screaming(&args.equation_name)
    );
    let check_name = format_ident!("_CONTRACT_CHECK_{}", suffix);
    let binding_name = format_ident!("_CONTRACT_BINDING_{}", suffix);

    let contract_stem = &args.contract_stem;
    let equation_name = &args.equation_name;
    let fn_name_str = input_fn.sig.ident.to_string();

    let fn_attrs = &input_fn.attrs;
    let fn_vis = &input_fn.vis;
    let fn_sig = &input_fn.sig;
    let fn_stmts = &input_fn.block.stmts;

    let expanded = quote! {
        #(#fn_attrs)*
        #fn_vis #fn_sig {
            #[allow(dead_code)]
            const #check_name: &str = env!(#env_key);

            #[allow(dead_code)]
            const #binding_name: &str = concat!(
                "contract=", #contract_stem,
                ",equation=", #equation_name,
                ",module=", module_path!(),
                ",function=", #fn_name_str,
            );

            #(#fn_stmts)*
        }
    };

    TokenStream::from(expanded)
}

fn screaming(s: &str) -> String {
    s.to_uppercase().replace(['-', '.'], "_")
}

/// Env var key for a contract stem and equation.
///
/// Convention: `CONTRACT_<STEM_UPPER>_<EQUATION_UPPER>` with hyphens and dots
/// replaced by underscores. `build.rs` in `ii-kernels` uses the same rule.
fn make_env_key(contract_stem: &str, equation: &str) -> String {
    format!(
        "CONTRACT_{}_{}",
        screaming(contract_stem),
        screaming(equation)
    )
}
