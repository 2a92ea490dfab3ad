use crate::admin::AdminSession;
use crate::cli::{AddArgs, Commands, PhotoCommands};
use crate::listings::{add_photo, format_price, remove_photo, PropertyForm, PropertyStore};
use crate::models::Property;
use crate::storage::KeyValueStore;
use anyhow::{bail, Result};
use std::io::Write;

/// Execute one CLI command against `storage`, writing user-facing output to `out`
pub fn run<S: KeyValueStore, W: Write>(
    command: Commands,
    storage: S,
    out: &mut W,
) -> Result<()> {
    let store = PropertyStore::new(&storage);
    let admin = AdminSession::new(&storage);

    match command {
        Commands::List => list(&store, admin.is_admin()?, out),
        Commands::Show { id } => show(&store, &id, out),
        Commands::Add(args) => {
            require_admin(&admin)?;
            add(&store, args, out)
        }
        Commands::Delete { id, yes } => {
            require_admin(&admin)?;
            if !yes {
                bail!("refusing to remove property {} without --yes", id);
            }
            store.delete(&id)?;
            writeln!(out, "Property {} removed", id)?;
            Ok(())
        }
        Commands::Photo(photo) => {
            require_admin(&admin)?;
            match photo {
                PhotoCommands::Add { id, url } => match add_photo(&store, &id, &url)? {
                    Some(galeria) => print_gallery(&galeria, out),
                    None => not_found_or_blank(&id, out),
                },
                PhotoCommands::Remove { id, url } => match remove_photo(&store, &id, &url)? {
                    Some(galeria) => print_gallery(&galeria, out),
                    None => not_found_or_blank(&id, out),
                },
            }
        }
        Commands::Login { password } => {
            if admin.login(&password)? {
                writeln!(out, "Logged in")?;
                Ok(())
            } else {
                bail!("wrong password")
            }
        }
        Commands::Logout => {
            admin.logout()?;
            writeln!(out, "Logged out")?;
            Ok(())
        }
        Commands::Whoami => {
            let role = if admin.is_admin()? { "admin" } else { "visitor" };
            writeln!(out, "{}", role)?;
            Ok(())
        }
    }
}

fn require_admin<S: KeyValueStore>(admin: &AdminSession<S>) -> Result<()> {
    if !admin.is_admin()? {
        bail!("admin login required");
    }
    Ok(())
}

fn list<S: KeyValueStore, W: Write>(
    store: &PropertyStore<S>,
    is_admin: bool,
    out: &mut W,
) -> Result<()> {
    let properties = store.list()?;
    if properties.is_empty() {
        if is_admin {
            writeln!(out, "No properties yet. Add the first one with `add`.")?;
        } else {
            writeln!(out, "No properties available at the moment.")?;
        }
        return Ok(());
    }

    for (i, property) in properties.iter().enumerate() {
        writeln!(out, "{}. {} [{}]", i + 1, property.nome, property.tipo)?;
        writeln!(out, "   {}", property.localizacao)?;
        writeln!(out, "   {}", format_price(property.preco))?;
        writeln!(out, "   ID: {}", property.id)?;
    }
    Ok(())
}

fn show<S: KeyValueStore, W: Write>(
    store: &PropertyStore<S>,
    id: &str,
    out: &mut W,
) -> Result<()> {
    match store.get_by_id(id)? {
        Some(property) => print_property(&property, out),
        None => {
            writeln!(out, "Property not found")?;
            Ok(())
        }
    }
}

fn add<S: KeyValueStore, W: Write>(
    store: &PropertyStore<S>,
    args: AddArgs,
    out: &mut W,
) -> Result<()> {
    let form = PropertyForm {
        nome: args.nome,
        tipo: args.tipo,
        preco: args.preco,
        localizacao: args.localizacao,
        imagem_principal: args.imagem_principal,
        descricao: args.descricao,
    };
    let property = store.create(form.into_new_property()?)?;
    writeln!(out, "Property added with ID {}", property.id)?;
    Ok(())
}

fn print_property<W: Write>(property: &Property, out: &mut W) -> Result<()> {
    writeln!(out, "{} [{}]", property.nome, property.tipo)?;
    writeln!(out, "Location: {}", property.localizacao)?;
    writeln!(out, "Price: {}", format_price(property.preco))?;
    writeln!(out, "Description: {}", property.descricao)?;
    writeln!(out, "Primary image: {}", property.imagem_principal)?;
    print_gallery(&property.galeria, out)
}

fn print_gallery<W: Write>(galeria: &[String], out: &mut W) -> Result<()> {
    writeln!(out, "Gallery ({} photos):", galeria.len())?;
    for (i, url) in galeria.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, url)?;
    }
    Ok(())
}

fn not_found_or_blank<W: Write>(id: &str, out: &mut W) -> Result<()> {
    writeln!(out, "Nothing changed: property {} not found or empty URL", id)?;
    Ok(())
}
