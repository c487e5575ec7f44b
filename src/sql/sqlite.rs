use sqlx_core::{
    decode::Decode,
    encode::{Encode, IsNull},
    error::BoxDynError,
    types::Type,
};
use sqlx_sqlite::{
    Sqlite, SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef,
};

use crate::time::ClockTime;

impl Type<Sqlite> for ClockTime {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <str as Type<Sqlite>>::compatible(ty)
            || <[u8] as Type<Sqlite>>::compatible(ty)
    }
}

impl Encode<'_, Sqlite> for ClockTime {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'_>>,
    ) -> Result<IsNull, BoxDynError> {
        Encode::<Sqlite>::encode(self.sql_value(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for ClockTime {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        // SQLite hands over TEXT as bytes without any fuss, and NULL is
        // handled by `Option<ClockTime>` before we ever get here.
        let text = <&[u8] as Decode<Sqlite>>::decode(value)?;
        Ok(ClockTime::parse(text)?)
    }
}
