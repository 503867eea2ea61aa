use crate::center::AdoptionCenter;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn pets(center: &AdoptionCenter) -> Result<CmdResult> {
    let listed = center.pets().cloned().collect();
    Ok(CmdResult::default().with_listed_pets(listed))
}

pub fn adopters(center: &AdoptionCenter) -> Result<CmdResult> {
    let listed = center.adopters().map(|a| center.view(a)).collect();
    Ok(CmdResult::default().with_listed_adopters(listed))
}
