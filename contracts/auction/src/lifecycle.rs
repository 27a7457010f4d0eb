use crate::errors::Error;
use crate::types::AuctionStatus;

/// Where the contract instance is in its life. `NotYetCreated` means no
/// auction record exists; `Destroyed` is terminal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    NotYetCreated,
    Live(AuctionStatus),
    Destroyed,
}

/// Kind of request, independent of its payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Create,
    Start,
    Bid,
    End,
    Delete,
}

/// Transition table. Any pair not listed is rejected.
pub fn advance(from: Phase, step: Step) -> Result<Phase, Error> {
    use AuctionStatus::{Created, Ended, Started};

    match (from, step) {
        (Phase::NotYetCreated, Step::Create) => Ok(Phase::Live(Created)),
        (Phase::Live(Created), Step::Start) => Ok(Phase::Live(Started)),
        // A second start re-arms the timer of a running auction.
        (Phase::Live(Started), Step::Start) => Ok(Phase::Live(Started)),
        (Phase::Live(Started), Step::Bid) => Ok(Phase::Live(Started)),
        (Phase::Live(Started), Step::End) => Ok(Phase::Live(Ended)),
        (Phase::Live(Created), Step::Delete) | (Phase::Live(Ended), Step::Delete) => {
            Ok(Phase::Destroyed)
        }

        (Phase::Destroyed, _) => Err(Error::AuctionDestroyed),
        (Phase::NotYetCreated, _) => Err(Error::NotCreated),
        (Phase::Live(_), Step::Create) => Err(Error::AlreadyCreated),
        (Phase::Live(Started), Step::Delete) => Err(Error::AuctionInProgress),
        (Phase::Live(_), _) => Err(Error::InvalidStatus),
    }
}
