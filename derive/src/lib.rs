use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;

/// Derives the `FromRng` trait.
///
/// Every field is drawn from the generator in declaration order, which makes the derived
/// value a pure function of the generator's state. Type parameters are required to implement
/// `FromRng` themselves.
#[proc_macro_derive(FromRng)]
pub fn derive_from_rng(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: syn::DeriveInput) -> syn::Result<TokenStream2> {
    let data = match input.data {
        syn::Data::Struct(data) => data,
        syn::Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                "`FromRng` cannot be derived for enums",
            ))
        }
        syn::Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`FromRng` cannot be derived for unions",
            ))
        }
    };

    let name = &input.ident;

    let mut generics = input.generics;
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(::splitmix64::FromRng));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = match &data.fields {
        syn::Fields::Named(fields) => {
            let init = fields.named.iter().map(|field| {
                let ident = &field.ident;
                quote! { #ident: ::splitmix64::FromRng::from_rng(rng), }
            });
            quote! { Self { #(#init)* } }
        }
        syn::Fields::Unnamed(fields) => {
            let init = fields
                .unnamed
                .iter()
                .map(|_| quote! { ::splitmix64::FromRng::from_rng(rng), });
            quote! { Self( #(#init)* ) }
        }
        syn::Fields::Unit => quote! { Self },
    };

    Ok(quote! {
        impl #impl_generics ::splitmix64::FromRng for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn from_rng(rng: &mut impl ::splitmix64::Rng) -> Self {
                #body
            }
        }
    })
}
