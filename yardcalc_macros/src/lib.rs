use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, FnArg, ItemFn, PatType, ReturnType, Type};

fn formatted_arg_error_msg(arg_name: &str, arg_pos: usize, fn_name: &str) -> String {
    format!(
        "argument {} ('{}') of {} must be f64, i64 or bool",
        arg_pos, arg_name, fn_name
    )
}

/// Turns a plain numeric function into a `Function` descriptor constructor.
///
/// ```ignore
/// #[yardcalc_fn]
/// fn clamp(value: f64, low: f64, high: f64) -> Result<f64, HandlerError> {
///     Ok(value.max(low).min(high))
/// }
///
/// calculator.register("clamp", clamp());
/// ```
///
/// The arity is the parameter count. `i64` parameters are truncated from the
/// incoming number and `bool` parameters are true for any non-zero number.
/// `Function` and `HandlerError` must be in scope at the expansion site.
#[proc_macro_attribute]
pub fn yardcalc_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let attrs = &input.attrs;
    let vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_args = &input.sig.inputs;
    let fn_output = &input.sig.output;
    let fn_body = &input.block.stmts;

    if let ReturnType::Default = fn_output {
        return Err(syn::Error::new(
            input.sig.span(),
            "expected a return type of Result<f64, HandlerError>",
        ));
    }

    let mut arg_extractions = Vec::new();

    for (i, arg) in fn_args.iter().enumerate() {
        let FnArg::Typed(PatType { pat, ty, .. }) = arg else {
            return Err(syn::Error::new(arg.span(), "methods are not supported"));
        };
        let arg_name = match **pat {
            syn::Pat::Ident(ref ident) => &ident.ident,
            _ => return Err(syn::Error::new(pat.span(), "unsupported pattern")),
        };

        let err_msg = formatted_arg_error_msg(&arg_name.to_string(), i, &fn_name.to_string());

        let type_ident = match **ty {
            Type::Path(ref type_path) => type_path
                .path
                .segments
                .last()
                .map(|segment| segment.ident.to_string()),
            _ => None,
        };

        let extract_code = match type_ident.as_deref() {
            Some("f64") => quote! {
                let #arg_name: f64 = args[#i];
            },
            Some("i64") => quote! {
                let #arg_name: i64 = args[#i] as i64;
            },
            Some("bool") => quote! {
                let #arg_name: bool = args[#i] != 0.0;
            },
            _ => return Err(syn::Error::new(ty.span(), err_msg)),
        };

        arg_extractions.push(extract_code);
    }

    let args_len = arg_extractions.len();
    let fn_label = fn_name.to_string();

    Ok(quote! {
        #(#attrs)*
        #vis fn #fn_name() -> Function {
            Function::new(#args_len, |args: &[f64]| #fn_output {
                if args.len() != #args_len {
                    return Err(format!(
                        "{} expects {} arguments, but got {}",
                        #fn_label,
                        #args_len,
                        args.len()
                    )
                    .into());
                }

                #(#arg_extractions)*

                #(#fn_body)*
            })
        }
    })
}
