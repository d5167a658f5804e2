//! `#[reflect(...)]` attribute parsing.

use syn::{Attribute, LitStr, Path};

/// Container attributes: `#[reflect(name = "...", homogeneous, crate = "...")]`.
#[derive(Default)]
pub struct ContainerAttrs {
    pub name: Option<LitStr>,
    pub homogeneous: bool,
    pub krate: Option<Path>,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    out.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("homogeneous") {
                    out.homogeneous = true;
                    Ok(())
                } else if meta.path.is_ident("crate") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.krate = Some(lit.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown reflect attribute; expected `name`, `homogeneous` or `crate`"))
                }
            })?;
        }

        Ok(out)
    }
}

/// Field attributes: `#[reflect(parent)]`, `#[reflect(skip)]`, `#[reflect(rename = "...")]`.
#[derive(Default)]
pub struct FieldAttrs {
    pub parent: bool,
    pub skip: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("parent") {
                    out.parent = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    out.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown reflect field attribute; expected `parent`, `skip` or `rename`"))
                }
            })?;
        }

        if out.parent && (out.skip || out.rename.is_some()) {
            let attr = attrs.iter().find(|a| a.path().is_ident("reflect"));
            return Err(syn::Error::new_spanned(
                attr,
                "`parent` cannot be combined with `skip` or `rename`",
            ));
        }

        Ok(out)
    }
}
