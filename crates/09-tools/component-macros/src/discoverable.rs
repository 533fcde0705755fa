//! 类型登记宏实现

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt, parse::Parse, parse::ParseStream, parse_macro_input, Ident, ItemStruct, LitStr,
    Result, Token,
};

/// 登记参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverableArgs {
    /// 是否为抽象类型
    pub is_abstract: bool,
    /// 是否带 Provider 注解
    pub provider: bool,
    /// Path 注解的值
    pub path: Option<String>,
    /// 自定义类型名称
    pub name: Option<String>,
}

impl Parse for DiscoverableArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = DiscoverableArgs::default();

        while !input.is_empty() {
            // `abstract` 是保留关键字，需要用 parse_any 读取
            let key = input.call(Ident::parse_any)?;

            if input.peek(Token![=]) {
                input.parse::<Token![=]>()?;
                let value: LitStr = input.parse()?;
                if key == "path" {
                    args.path = Some(value.value());
                } else if key == "name" {
                    args.name = Some(value.value());
                } else {
                    return Err(syn::Error::new(key.span(), format!("未知参数: {}", key)));
                }
            } else if key == "abstract" {
                args.is_abstract = true;
            } else if key == "provider" {
                args.provider = true;
            } else {
                return Err(syn::Error::new(key.span(), format!("未知参数: {}", key)));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// 实现 #[discoverable] 宏
pub fn discoverable_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let discoverable_args = if args.is_empty() {
        DiscoverableArgs::default()
    } else {
        match syn::parse::<DiscoverableArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let input_struct = parse_macro_input!(input as ItemStruct);

    if !input_struct.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input_struct.generics,
            "#[discoverable] 不支持泛型类型",
        )
        .to_compile_error()
        .into();
    }

    let struct_name = &input_struct.ident;
    let discovered_impl = quote! {
        impl ::auto_config::__private::Discovered for #struct_name {}
    };
    let registration_code = generate_registration_code(struct_name, &discoverable_args);

    let expanded = quote! {
        #input_struct

        #discovered_impl

        #registration_code
    };

    TokenStream::from(expanded)
}

/// 生成类型登记代码
fn generate_registration_code(
    struct_name: &Ident,
    args: &DiscoverableArgs,
) -> proc_macro2::TokenStream {
    let registration_fn_name = format_ident!("__discover_class_{}", struct_name);

    let class_name = args
        .name
        .clone()
        .unwrap_or_else(|| struct_name.to_string());
    let is_abstract = args.is_abstract;

    let mut annotations = Vec::new();
    if args.provider {
        annotations.push(quote! {
            ::auto_config::__private::Annotation::marker(
                ::auto_config::__private::annotations::PROVIDER,
            )
        });
    }
    if let Some(path) = &args.path {
        annotations.push(quote! {
            ::auto_config::__private::Annotation::with_value(
                ::auto_config::__private::annotations::PATH,
                #path,
            )
        });
    }

    quote! {
        // 使用 ctor 在程序启动时登记到全局类型表
        #[::ctor::ctor]
        #[allow(non_snake_case)]
        fn #registration_fn_name() {
            #[allow(unused_imports)]
            use ::auto_config::__private::{
                NoBundle as _, NoHealthCheck as _, NoInjectableProvider as _, NoManaged as _,
                NoTask as _, ViaBundle as _, ViaHealthCheck as _, ViaInjectableProvider as _,
                ViaManaged as _, ViaTask as _,
            };

            let probe = ::auto_config::__private::Probe::<#struct_name>::new();
            let supertypes = [
                (&&probe).bundle(),
                (&&probe).health_check(),
                (&&probe).injectable_provider(),
                (&&probe).managed(),
                (&&probe).task(),
            ];

            let mut descriptor = ::auto_config::__private::ClassDescriptor::new(
                ::auto_config::__private::TypeInfo::named::<#struct_name>(
                    concat!(module_path!(), "::", #class_name),
                ),
            )
            .with_abstract(#is_abstract);

            for supertype in supertypes.into_iter().flatten() {
                descriptor = descriptor.with_supertype(supertype);
            }
            #(
                descriptor = descriptor.with_annotation(#annotations);
            )*

            ::auto_config::__private::register_class(descriptor);
        }
    }
}
