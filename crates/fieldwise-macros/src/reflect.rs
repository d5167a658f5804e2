//! `#[derive(Reflect)]` expansion.
//!
//! One ordered member list drives every generated item: the `TYPE_INFO`
//! descriptors, the visiting order, the `Field<N>` impls and the dynamic
//! slots. Indices therefore agree by construction.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Index, Member, Path, Type, parse_macro_input, parse_quote};

use crate::attrs::{ContainerAttrs, FieldAttrs};

/// Main entry point for the Reflect derive macro.
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_reflect_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A field that takes part in the registry.
struct Reflected {
    member: Member,
    ty: Type,
    name: Option<String>,
}

/// The field holding the parent registry.
struct ParentSlot {
    member: Member,
    ty: Type,
}

enum Kind {
    Declared,
    Tuple,
    Homogeneous,
}

fn derive_reflect_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let attrs = ContainerAttrs::parse(&input.attrs)?;
    let krate: Path = attrs.krate.clone().unwrap_or_else(|| parse_quote!(::fieldwise));

    let data = match &input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Reflect can only be derived for structs",
            ));
        }
    };

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Reflect requires 'static types; lifetime parameters are not supported",
        ));
    }

    let positional = matches!(data.fields, Fields::Unnamed(_));
    let (members, parent) = collect_members(&data.fields, positional)?;

    let kind = if attrs.homogeneous {
        check_homogeneous(input, &members, parent.as_ref(), &data.fields)?;
        Kind::Homogeneous
    } else if positional {
        Kind::Tuple
    } else {
        Kind::Declared
    };

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    if let Some(parent) = &parent {
        let ty = &parent.ty;
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#ty: #krate::Reflect));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let type_name = match &attrs.name {
        Some(name) => quote! { #krate::TypeName::Declared(#name) },
        None if input.generics.params.is_empty() => {
            let name = ident.unraw().to_string();
            quote! { #krate::TypeName::Declared(#name) }
        }
        None => quote! { #krate::TypeName::of::<Self>() },
    };

    let kind_tokens = match kind {
        Kind::Declared => quote! { #krate::RegistryKind::Declared },
        Kind::Tuple => quote! { #krate::RegistryKind::Tuple },
        Kind::Homogeneous => quote! { #krate::RegistryKind::Homogeneous },
    };

    let field_infos = members.iter().enumerate().map(|(index, m)| {
        let ty = &m.ty;
        match &m.name {
            Some(name) => quote! { #krate::FieldInfo::named::<#ty>(#index, #name) },
            None => quote! { #krate::FieldInfo::positional::<#ty>(#index) },
        }
    });

    let parent_info = match &parent {
        Some(p) => {
            let ty = &p.ty;
            quote! { ::core::option::Option::Some(<#ty as #krate::Reflect>::TYPE_INFO) }
        }
        None => quote! { ::core::option::Option::None },
    };

    let indices: Vec<usize> = (0..members.len()).collect();
    let accesses: Vec<&Member> = members.iter().map(|m| &m.member).collect();

    let full_traversal = parent.as_ref().map(|p| {
        let member = &p.member;
        quote! {
            fn for_each_full<__FieldwiseVisitor: #krate::Visitor>(
                &self,
                visitor: &mut __FieldwiseVisitor,
            ) {
                #krate::Reflect::for_each_full(&self.#member, visitor);
                #krate::Reflect::for_each(self, visitor);
            }

            fn for_each_full_mut<__FieldwiseVisitor: #krate::VisitorMut>(
                &mut self,
                visitor: &mut __FieldwiseVisitor,
            ) {
                #krate::Reflect::for_each_full_mut(&mut self.#member, visitor);
                #krate::Reflect::for_each_mut(self, visitor);
            }
        }
    });

    let reflect_impl = quote! {
        impl #impl_generics #krate::Reflect for #ident #ty_generics #where_clause {
            const TYPE_INFO: &'static #krate::TypeInfo = &#krate::TypeInfo {
                name: #type_name,
                kind: #kind_tokens,
                fields: &[#(#field_infos),*],
                parent: #parent_info,
            };

            #[allow(unused_variables)]
            fn for_each<__FieldwiseVisitor: #krate::Visitor>(
                &self,
                visitor: &mut __FieldwiseVisitor,
            ) {
                #(
                    #krate::Visitor::visit(
                        visitor,
                        &<Self as #krate::Reflect>::TYPE_INFO.fields[#indices],
                        &self.#accesses,
                    );
                )*
            }

            #[allow(unused_variables)]
            fn for_each_mut<__FieldwiseVisitor: #krate::VisitorMut>(
                &mut self,
                visitor: &mut __FieldwiseVisitor,
            ) {
                #(
                    #krate::VisitorMut::visit_mut(
                        visitor,
                        &<Self as #krate::Reflect>::TYPE_INFO.fields[#indices],
                        &mut self.#accesses,
                    );
                )*
            }

            #full_traversal

            fn field_any(
                &self,
                index: usize,
            ) -> ::core::option::Option<&dyn ::core::any::Any> {
                match index {
                    #( #indices => ::core::option::Option::Some(&self.#accesses), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_any_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn ::core::any::Any> {
                match index {
                    #( #indices => ::core::option::Option::Some(&mut self.#accesses), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    let field_impls = members.iter().enumerate().map(|(index, m)| {
        let ty = &m.ty;
        let member = &m.member;
        quote! {
            impl #impl_generics #krate::Field<#index> for #ident #ty_generics #where_clause {
                type Type = #ty;

                #[inline]
                fn get(&self) -> &#ty {
                    &self.#member
                }

                #[inline]
                fn get_mut(&mut self) -> &mut #ty {
                    &mut self.#member
                }
            }
        }
    });

    let inherits_impl = parent.as_ref().map(|p| {
        let ty = &p.ty;
        let member = &p.member;
        quote! {
            impl #impl_generics #krate::Inherits for #ident #ty_generics #where_clause {
                type Parent = #ty;

                fn parent(&self) -> &#ty {
                    &self.#member
                }

                fn parent_mut(&mut self) -> &mut #ty {
                    &mut self.#member
                }
            }
        }
    });

    let homogeneous_impl = match kind {
        Kind::Homogeneous => {
            let element = &members[0].ty;
            let len = members.len();
            let layout_check = input.generics.params.is_empty().then(|| {
                quote! {
                    const _: () = #krate::assert_packed::<#ident, #element>(#len);
                }
            });
            Some(quote! {
                impl #impl_generics #krate::Homogeneous for #ident #ty_generics #where_clause {
                    type Element = #element;

                    const LEN: usize = {
                        #krate::assert_packed::<Self, #element>(#len);
                        #len
                    };

                    fn element(&self, index: usize) -> ::core::option::Option<&#element> {
                        if index >= <Self as #krate::Homogeneous>::LEN {
                            return ::core::option::Option::None;
                        }
                        match index {
                            #( #indices => ::core::option::Option::Some(&self.#accesses), )*
                            _ => ::core::option::Option::None,
                        }
                    }

                    fn element_mut(
                        &mut self,
                        index: usize,
                    ) -> ::core::option::Option<&mut #element> {
                        if index >= <Self as #krate::Homogeneous>::LEN {
                            return ::core::option::Option::None;
                        }
                        match index {
                            #( #indices => ::core::option::Option::Some(&mut self.#accesses), )*
                            _ => ::core::option::Option::None,
                        }
                    }
                }

                #layout_check
            })
        }
        _ => None,
    };

    Ok(quote! {
        #reflect_impl
        #(#field_impls)*
        #inherits_impl
        #homogeneous_impl
    })
}

/// Split the struct's fields into reflected members and the optional parent.
fn collect_members(
    fields: &Fields,
    positional: bool,
) -> syn::Result<(Vec<Reflected>, Option<ParentSlot>)> {
    let mut members = Vec::new();
    let mut parent: Option<ParentSlot> = None;

    for (position, field) in fields.iter().enumerate() {
        let field_attrs = FieldAttrs::parse(&field.attrs)?;
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(position)),
        };

        if field_attrs.parent {
            if parent.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field can be marked #[reflect(parent)]",
                ));
            }
            parent = Some(ParentSlot {
                member,
                ty: field.ty.clone(),
            });
            continue;
        }

        if field_attrs.skip {
            continue;
        }

        let name = match (&field.ident, &field_attrs.rename) {
            (_, Some(_)) if positional => {
                return Err(syn::Error::new_spanned(
                    field,
                    "`rename` applies to named fields only",
                ));
            }
            (_, Some(rename)) => Some(rename.value()),
            (Some(ident), None) => Some(ident.unraw().to_string()),
            (None, None) => None,
        };

        members.push(Reflected {
            member,
            ty: field.ty.clone(),
            name,
        });
    }

    Ok((members, parent))
}

/// Homogeneous types must be a plain run of one element type.
fn check_homogeneous(
    input: &DeriveInput,
    members: &[Reflected],
    parent: Option<&ParentSlot>,
    fields: &Fields,
) -> syn::Result<()> {
    if parent.is_some() || members.len() != fields.len() {
        return Err(syn::Error::new_spanned(
            input,
            "homogeneous types cannot use `parent` or `skip`",
        ));
    }
    if members.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "homogeneous types need at least one field",
        ));
    }
    Ok(())
}
