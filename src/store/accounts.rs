//! User accounts and their person profiles.
//!
//! An account never exists without its profile: both are created by
//! [`RecordStore::create_account_with_profile`] and removed together by
//! [`RecordStore::delete_account`].

use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{Person, PersonId, Profile, RecordId, User, UserId};

use super::table::Record;
use super::{RecordStore, not_found};

impl RecordStore {
    /// Creates an account and its linked person in one step.
    ///
    /// Either both records are stored or neither is.
    pub fn create_account_with_profile(&mut self, user: User) -> StoreResult<(UserId, PersonId)> {
        if let Err(err) = self.check_user(&user, None) {
            warn!(username = %user.username, error = %err, "Rejected account");
            return Err(err);
        }

        let user_id = self.users.insert(user);
        let person_id = self.persons.insert(Person { user: user_id });
        info!(
            user = user_id.raw(),
            person = person_id.raw(),
            "Created account with profile"
        );
        Ok((user_id, person_id))
    }

    /// Looks up an account.
    pub fn user(&self, id: UserId) -> StoreResult<&Record<UserId, User>> {
        self.users.get(id).ok_or_else(|| not_found(id))
    }

    /// All accounts, in creation order.
    pub fn users(&self) -> impl Iterator<Item = &Record<UserId, User>> {
        self.users.iter()
    }

    /// Replaces an account's fields.
    pub fn update_account(&mut self, id: UserId, user: User) -> StoreResult<()> {
        if !self.users.contains(id) {
            return Err(not_found(id));
        }
        self.check_user(&user, Some(id))?;
        self.users.replace(id, user);
        Ok(())
    }

    /// Deletes an account, its person and everything owned by either.
    ///
    /// Returns the number of records removed, the account included.
    pub fn delete_account(&mut self, id: UserId) -> StoreResult<usize> {
        if !self.users.contains(id) {
            return Err(not_found(id));
        }
        let removed = self.remove_user(id);
        info!(user = id.raw(), removed, "Deleted account");
        Ok(removed)
    }

    /// The person linked to an account.
    ///
    /// Fails with `NotFound` naming the account when no person is linked,
    /// which only happens after the person was deleted directly.
    pub fn person_of(&self, user: UserId) -> StoreResult<&Record<PersonId, Person>> {
        self.persons
            .iter()
            .find(|p| p.user == user)
            .ok_or_else(|| not_found(user))
    }

    /// A person joined with its account.
    pub fn person_profile(&self, id: PersonId) -> StoreResult<Profile<'_>> {
        let person = self.persons.get(id).ok_or_else(|| not_found(id))?;
        let user = self.user(person.user)?;
        Ok(Profile {
            person: person.data(),
            user: user.data(),
        })
    }

    fn check_user(&self, user: &User, existing: Option<UserId>) -> StoreResult<()> {
        let max = self.config.limits.max_name_length;
        if user.username.chars().count() > max {
            return Err(StoreError::FieldTooLong {
                entity: UserId::ENTITY,
                field: "username",
                max,
            });
        }
        let taken = self
            .users
            .iter()
            .any(|row| Some(row.id()) != existing && row.username == user.username);
        if taken {
            return Err(StoreError::UniquenessViolation {
                entity: UserId::ENTITY,
                field: "username",
                value: user.username.clone(),
            });
        }
        Ok(())
    }
}
